//! Dynamic path routing.
//!
//! Responses embed API paths (`/{orcid-id}/{resource}[/{put-code}]`) for
//! most of their sections. [`dispatch`] routes such a path to the matching
//! endpoint wrapper and returns the result as a [`Resource`] variant, so
//! callers match on the tag instead of downcasting.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{
    ActivitiesSummary, Addresses, Biography, Distinctions, Educations, Emails, Employments,
    ExternalIdentifiers, Fundings, InvitedPositions, Keywords, Memberships, OrcidId, OtherNames,
    PeerReviews, Person, Qualifications, Record, ResearchResources, ResearcherUrls, Services,
    Work, Works,
};
use crate::{Error, Result};

use super::{ActivitiesService, AffiliationsService, RecordsService, WorksService};

/// A resource fetched by path: one variant per addressable shape.
///
/// Person-scoped variants hold `Option`s because the corresponding section
/// may be absent from the record.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Resource {
    /// A complete record (`/{id}` or `/{id}/record`).
    Record(Box<Record>),
    /// The person section (`/{id}/person`).
    Person(Box<Person>),
    /// The grouped works summaries (`/{id}/works`).
    Works(Works),
    /// One full work (`/{id}/work/{put-code}`).
    Work(Box<Work>),
    /// The educations collection (`/{id}/educations`).
    Educations(Educations),
    /// The employments collection (`/{id}/employments`).
    Employments(Employments),
    /// The fundings collection (`/{id}/fundings`).
    Fundings(Fundings),
    /// The peer reviews collection (`/{id}/peer-reviews`).
    PeerReviews(PeerReviews),
    /// The distinctions collection (`/{id}/distinctions`).
    Distinctions(Distinctions),
    /// The invited positions collection (`/{id}/invited-positions`).
    InvitedPositions(InvitedPositions),
    /// The memberships collection (`/{id}/memberships`).
    Memberships(Memberships),
    /// The qualifications collection (`/{id}/qualifications`).
    Qualifications(Qualifications),
    /// The services collection (`/{id}/services`).
    Services(Services),
    /// The research resources collection (`/{id}/research-resources`).
    ResearchResources(ResearchResources),
    /// The activities summary, served from the full record
    /// (`/{id}/activities`).
    Activities(Option<Box<ActivitiesSummary>>),
    /// The biography, served from the person section.
    Biography(Option<Biography>),
    /// Alternative names, served from the person section.
    OtherNames(Option<OtherNames>),
    /// Researcher URLs, served from the person section.
    ResearcherUrls(Option<ResearcherUrls>),
    /// Email addresses, served from the person section (`/{id}/email`).
    Emails(Option<Emails>),
    /// Addresses, served from the person section (`/{id}/address`).
    Addresses(Option<Addresses>),
    /// Keywords, served from the person section.
    Keywords(Option<Keywords>),
    /// Person-level external identifiers, served from the person section.
    ExternalIdentifiers(Option<ExternalIdentifiers>),
}

/// A path split into its segments: `/{id}[/{resource}[/{sub}]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParsedPath<'a> {
    id: &'a str,
    resource: Option<&'a str>,
    sub: Option<&'a str>,
}

fn parse_path(path: &str) -> Result<ParsedPath<'_>> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let mut segments = trimmed.splitn(2, '/');

    let id = segments.next().unwrap_or_default();
    if id.is_empty() {
        return Err(Error::InvalidPath(path.to_string()));
    }

    let (resource, sub) = match segments.next() {
        None | Some("") => (None, None),
        Some(rest) => {
            let mut parts = rest.splitn(2, '/');
            let resource = parts.next().unwrap_or_default();
            (Some(resource), parts.next())
        }
    };

    Ok(ParsedPath { id, resource, sub })
}

pub(crate) async fn dispatch(inner: &Arc<ClientInner>, path: &str) -> Result<Resource> {
    let parsed = parse_path(path)?;
    let id = OrcidId::new(parsed.id);

    let records = RecordsService::new(inner.clone());
    let works = WorksService::new(inner.clone());
    let affiliations = AffiliationsService::new(inner.clone());
    let activities = ActivitiesService::new(inner.clone());

    match parsed.resource {
        None | Some("record") => Ok(Resource::Record(Box::new(records.record(&id).await?))),
        Some("person") => Ok(Resource::Person(Box::new(records.person(&id).await?))),
        Some("works") => Ok(Resource::Works(works.list(&id).await?)),
        Some("work") => {
            let sub = parsed.sub.ok_or_else(|| {
                Error::InvalidPath(format!("work path requires a put-code: {path}"))
            })?;
            let put_code = sub
                .parse()
                .map_err(|_| Error::InvalidPath(format!("invalid put-code {sub:?} in path: {path}")))?;
            Ok(Resource::Work(Box::new(works.get(&id, put_code).await?)))
        }
        Some("educations") => Ok(Resource::Educations(affiliations.educations(&id).await?)),
        Some("employments") => Ok(Resource::Employments(affiliations.employments(&id).await?)),
        Some("distinctions") => Ok(Resource::Distinctions(affiliations.distinctions(&id).await?)),
        Some("invited-positions") => Ok(Resource::InvitedPositions(
            affiliations.invited_positions(&id).await?,
        )),
        Some("memberships") => Ok(Resource::Memberships(affiliations.memberships(&id).await?)),
        Some("qualifications") => Ok(Resource::Qualifications(
            affiliations.qualifications(&id).await?,
        )),
        Some("services") => Ok(Resource::Services(affiliations.services(&id).await?)),
        Some("fundings") => Ok(Resource::Fundings(activities.fundings(&id).await?)),
        Some("peer-reviews") => Ok(Resource::PeerReviews(activities.peer_reviews(&id).await?)),
        Some("research-resources") => Ok(Resource::ResearchResources(
            activities.research_resources(&id).await?,
        )),
        Some("activities") => {
            // The activities summary has no standalone endpoint.
            let record = records.record(&id).await?;
            Ok(Resource::Activities(
                record.activities_summary.map(Box::new),
            ))
        }
        Some(
            section @ ("biography" | "other-names" | "researcher-urls" | "email" | "address"
            | "keywords" | "external-identifiers"),
        ) => {
            let person = records.person(&id).await?;
            Ok(match section {
                "biography" => Resource::Biography(person.biography),
                "other-names" => Resource::OtherNames(person.other_names),
                "researcher-urls" => Resource::ResearcherUrls(person.researcher_urls),
                "email" => Resource::Emails(person.emails),
                "address" => Resource::Addresses(person.addresses),
                "keywords" => Resource::Keywords(person.keywords),
                _ => Resource::ExternalIdentifiers(person.external_identifiers),
            })
        }
        Some(other) => Err(Error::InvalidPath(format!(
            "unsupported resource type {other:?} in path: {path}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_id() {
        let parsed = parse_path("/0000-0002-1825-0097").unwrap();
        assert_eq!(parsed.id, "0000-0002-1825-0097");
        assert_eq!(parsed.resource, None);
        assert_eq!(parsed.sub, None);
    }

    #[test]
    fn parse_resource_and_put_code() {
        let parsed = parse_path("/0000-0002-1825-0097/work/92636200").unwrap();
        assert_eq!(parsed.id, "0000-0002-1825-0097");
        assert_eq!(parsed.resource, Some("work"));
        assert_eq!(parsed.sub, Some("92636200"));
    }

    #[test]
    fn parse_without_leading_separator() {
        let parsed = parse_path("0000-0002-1825-0097/works").unwrap();
        assert_eq!(parsed.resource, Some("works"));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(parse_path("").is_err());
        assert!(parse_path("/").is_err());
    }

    #[test]
    fn parse_trailing_slash_means_no_resource() {
        let parsed = parse_path("/0000-0002-1825-0097/").unwrap();
        assert_eq!(parsed.resource, None);
    }
}
