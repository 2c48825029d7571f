//! Selection and tab state for the warm-lead detail overlay.

use thiserror::Error;

use crate::models::Lead;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Context,
    Email,
}

/// Where a click inside the open overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the panel.
    Backdrop,
    /// Anything inside the detail panel. Never reaches the backdrop handler.
    Panel,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadDetailError {
    #[error("no lead is selected")]
    NoSelection,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LeadDetail {
    #[default]
    Closed,
    Open { lead: Box<Lead>, tab: DetailTab },
}

impl LeadDetail {
    /// Opens `lead`, always starting on the context tab.
    pub fn select(&mut self, lead: Lead) {
        *self = Self::Open {
            lead: Box::new(lead),
            tab: DetailTab::Context,
        };
    }

    pub fn switch_tab(&mut self, next: DetailTab) -> Result<(), LeadDetailError> {
        match self {
            Self::Open { tab, .. } => {
                *tab = next;
                Ok(())
            }
            Self::Closed => Err(LeadDetailError::NoSelection),
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn handle_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    pub fn selected(&self) -> Option<&Lead> {
        match self {
            Self::Open { lead, .. } => Some(lead.as_ref()),
            Self::Closed => None,
        }
    }

    pub fn active_tab(&self) -> Option<DetailTab> {
        match self {
            Self::Open { tab, .. } => Some(*tab),
            Self::Closed => None,
        }
    }
}
