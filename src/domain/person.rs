//! Person domain model
//!
//! A person is a bundle of validated fields. Identity is decided by the
//! network ID alone, so two records with different names but the same
//! network login are treated as the same person.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields::{
    Address, Email, GitHubId, Name, NusNetworkId, PersonType, Phone, StudentId, Tag, TutorialId,
};

/// A person in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,

    pub email: Email,

    #[serde(rename = "type")]
    pub person_type: PersonType,

    pub github_id: GitHubId,

    pub nus_network_id: NusNetworkId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutorial_id: Option<TutorialId>,

    /// Ordered set so output and storage are stable
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    /// Creates a person with the mandatory fields and nothing else
    pub fn new(
        name: Name,
        email: Email,
        person_type: PersonType,
        github_id: GitHubId,
        nus_network_id: NusNetworkId,
    ) -> Self {
        Self {
            name,
            email,
            person_type,
            github_id,
            nus_network_id,
            phone: None,
            address: None,
            student_id: None,
            tutorial_id: None,
            tags: BTreeSet::new(),
        }
    }

    /// Returns true if both records describe the same person
    ///
    /// Weaker than `==`: only the network ID is compared.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.nus_network_id == other.nus_network_id
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Type: {}; Email: {}; GitHub: {}; Network ID: {}",
            self.name, self.person_type, self.email, self.github_id, self.nus_network_id
        )?;
        if let Some(phone) = &self.phone {
            write!(f, "; Phone: {}", phone)?;
        }
        if let Some(address) = &self.address {
            write!(f, "; Address: {}", address)?;
        }
        if let Some(student_id) = &self.student_id {
            write!(f, "; Student ID: {}", student_id)?;
        }
        if let Some(tutorial_id) = &self.tutorial_id {
            write!(f, "; Tutorial: {}", tutorial_id)?;
        }
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }
        Ok(())
    }
}

/// Matches persons whose name contains any of the keywords as a whole word
///
/// Matching ignores case. An empty keyword list matches nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.keywords.iter().any(|keyword| {
            person
                .name
                .as_ref()
                .split_whitespace()
                .any(|word| word.eq_ignore_ascii_case(keyword))
        })
    }
}
