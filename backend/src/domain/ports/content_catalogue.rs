//! Driving port for curated support content.

use async_trait::async_trait;

use crate::domain::{
    CommunityEvent, CrisisLine, Error, EventKind, ResourceCollection, ResourceLink,
};

/// Driving port for reading curated content: crisis lines, resource
/// collections, and community events.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// Crisis support services, most urgent first.
    async fn crisis_lines(&self) -> Result<Vec<CrisisLine>, Error>;

    /// Themed resource collections in presentation order.
    async fn resource_collections(&self) -> Result<Vec<ResourceCollection>, Error>;

    /// Upcoming community events in date order.
    async fn events(&self) -> Result<Vec<CommunityEvent>, Error>;
}

/// Built-in content catalogue.
///
/// The curated data is compiled in rather than stored: it changes with the
/// site's editorial content, not with user activity, so it ships with the
/// binary the same way the page copy does.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinContentCatalogue;

fn link(label: &str, url: &str) -> ResourceLink {
    ResourceLink {
        label: label.to_owned(),
        url: url.to_owned(),
    }
}

#[async_trait]
impl ContentQuery for BuiltinContentCatalogue {
    async fn crisis_lines(&self) -> Result<Vec<CrisisLine>, Error> {
        Ok(vec![
            CrisisLine {
                name: "988 Suicide & Crisis Lifeline".to_owned(),
                description: "Free, confidential support 24/7 for people in distress".to_owned(),
                contact: "Call or text 988".to_owned(),
                link: "tel:988".to_owned(),
            },
            CrisisLine {
                name: "The Trevor Project".to_owned(),
                description: "Crisis support for LGBTQ+ young people".to_owned(),
                contact: "Call 1-866-488-7386 or visit for chat/text".to_owned(),
                link: "https://www.thetrevorproject.org/get-help/".to_owned(),
            },
            CrisisLine {
                name: "Crisis Text Line".to_owned(),
                description: "Text-based crisis support".to_owned(),
                contact: "Text HOME to 741741".to_owned(),
                link: "https://www.crisistextline.org/".to_owned(),
            },
            CrisisLine {
                name: "Trans Lifeline".to_owned(),
                description: "Support for trans and questioning individuals".to_owned(),
                contact: "1-877-565-8860".to_owned(),
                link: "tel:1-877-565-8860".to_owned(),
            },
        ])
    }

    async fn resource_collections(&self) -> Result<Vec<ResourceCollection>, Error> {
        Ok(vec![
            ResourceCollection {
                title: "Coming Out Resources".to_owned(),
                description: "Guides and support for coming out to family, friends, and yourself"
                    .to_owned(),
                links: vec![
                    link("PFLAG: Coming Out", "https://pflag.org/resource/coming-out/"),
                    link(
                        "HRC: Coming Out Guide",
                        "https://www.hrc.org/resources/resource-guide-to-coming-out",
                    ),
                    link(
                        "Trevor Project: Coming Out Handbook",
                        "https://www.thetrevorproject.org/resources/guide/the-coming-out-handbook/",
                    ),
                    link(
                        "The Gender Unicorn (education)",
                        "https://www.transstudent.org/gender/",
                    ),
                ],
            },
            ResourceCollection {
                title: "Mental Health Support".to_owned(),
                description:
                    "Resources for managing anxiety, depression, and other mental health challenges"
                        .to_owned(),
                links: vec![
                    link("NAMI Help & Support", "https://www.nami.org/help"),
                    link("APA Psychologist Locator", "https://locator.apa.org/"),
                    link("MentalHealth.gov", "https://www.mentalhealth.gov/"),
                    link(
                        "HelpGuide: LGBTQ+ Mental Health",
                        "https://www.helpguide.org/articles/abuse/lgbtq-issues.htm",
                    ),
                ],
            },
            ResourceCollection {
                title: "Educational Content".to_owned(),
                description: "Learn about LGBTQ+ identities, rights, and history".to_owned(),
                links: vec![
                    link("GLSEN: Educator Resources", "https://www.glsen.org/resources"),
                    link(
                        "GLAAD: Media Reference Guide",
                        "https://www.glaad.org/reference",
                    ),
                    link(
                        "HRC: LGBTQ+ Definitions",
                        "https://www.hrc.org/resources/terminology",
                    ),
                    link(
                        "Planned Parenthood: Sexual Orientation & Gender",
                        "https://www.plannedparenthood.org/learn/sexual-orientation-gender",
                    ),
                ],
            },
            ResourceCollection {
                title: "Community Building".to_owned(),
                description: "Find local and online LGBTQ+ communities and support groups"
                    .to_owned(),
                links: vec![
                    link("PFLAG Chapter Finder", "https://pflag.org/find/"),
                    link("TrevorSpace (13\u{2013}24)", "https://www.trevorspace.org/"),
                    link("Q Chat Space (13\u{2013}19)", "https://www.qchatspace.org/"),
                    link("Reddit: r/lgbt", "https://www.reddit.com/r/lgbt/"),
                ],
            },
        ])
    }

    async fn events(&self) -> Result<Vec<CommunityEvent>, Error> {
        Ok(vec![
            CommunityEvent {
                name: "Community Pride Meetup".to_owned(),
                date: "2025-10-20".to_owned(),
                location: "Downtown Community Center".to_owned(),
                kind: EventKind::Community,
                link: "https://example.org/events/pride-meetup".to_owned(),
                all_ages: true,
            },
            CommunityEvent {
                name: "Trans Wellness Workshop".to_owned(),
                date: "2025-10-22".to_owned(),
                location: "Riverfront Health Clinic".to_owned(),
                kind: EventKind::Workshop,
                link: "https://example.org/events/trans-wellness".to_owned(),
                all_ages: false,
            },
            CommunityEvent {
                name: "Queer Film Night".to_owned(),
                date: "2025-10-25".to_owned(),
                location: "Sunset Arts Theater".to_owned(),
                kind: EventKind::Discussion,
                link: "https://example.org/events/queer-film-night".to_owned(),
                all_ages: false,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn catalogue_serves_four_crisis_lines() {
        let catalogue = BuiltinContentCatalogue;
        let lines = catalogue.crisis_lines().await.expect("builtin lines");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].contact, "Call or text 988");
    }

    #[rstest]
    #[tokio::test]
    async fn every_collection_carries_links() {
        let catalogue = BuiltinContentCatalogue;
        let collections = catalogue
            .resource_collections()
            .await
            .expect("builtin collections");
        assert_eq!(collections.len(), 4);
        assert!(collections.iter().all(|c| !c.links.is_empty()));
    }

    #[rstest]
    #[tokio::test]
    async fn events_are_in_date_order() {
        let catalogue = BuiltinContentCatalogue;
        let events = catalogue.events().await.expect("builtin events");
        let dates: Vec<_> = events.iter().map(|e| e.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_unstable();
        assert_eq!(dates, sorted);
    }
}
