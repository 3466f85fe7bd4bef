use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Lead pipeline. Transitions are suggestions; any status may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    New,
    Contacted,
    InDiscussion,
    ProposalSent,
    Closed,
}

string_enum!(ContactStatus {
    New => "new",
    Contacted => "contacted",
    InDiscussion => "in-discussion",
    ProposalSent => "proposal-sent",
    Closed => "closed",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetBand {
    #[serde(rename = "under-5k")]
    Under5k,
    #[serde(rename = "5k-10k")]
    From5kTo10k,
    #[serde(rename = "10k-25k")]
    From10kTo25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "50k-plus")]
    Over50k,
}

string_enum!(BudgetBand {
    Under5k => "under-5k",
    From5kTo10k => "5k-10k",
    From10kTo25k => "10k-25k",
    From25kTo50k => "25k-50k",
    Over50k => "50k-plus",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineBand {
    #[serde(rename = "asap")]
    Asap,
    #[serde(rename = "1-3-months")]
    OneToThreeMonths,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "6-plus-months")]
    OverSixMonths,
    #[serde(rename = "flexible")]
    Flexible,
}

string_enum!(TimelineBand {
    Asap => "asap",
    OneToThreeMonths => "1-3-months",
    ThreeToSixMonths => "3-6-months",
    OverSixMonths => "6-plus-months",
    Flexible => "flexible",
});

/// Contact form submission (lead)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: BudgetBand,
    pub timeline: TimelineBand,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_all_enumerated_values() {
        for status in ContactStatus::ALL {
            assert_eq!(status.as_str().parse::<ContactStatus>().unwrap(), *status);
        }
        assert!("archived".parse::<ContactStatus>().is_err());
        assert!("In-Discussion".parse::<ContactStatus>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for band in BudgetBand::ALL {
            let json = serde_json::to_string(band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.as_str()));
        }
        for band in TimelineBand::ALL {
            let json = serde_json::to_string(band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.as_str()));
        }
        assert_eq!(serde_json::to_string(&ContactStatus::ProposalSent).unwrap(), "\"proposal-sent\"");
    }
}
