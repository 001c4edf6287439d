//! One-time checklist and personnel status derivation.

use entity::drone::RecurringData;

/// The ten fixed one-time checklist item flags for a drone.
///
/// Completion count is the plain count of true predicates; items carry no
/// weighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneTimeChecklist {
    /// Item 1: the organization has at least one roster member.
    pub organizational_manual: bool,
    /// Item 2: the training procedure manual is uploaded.
    pub training_procedure_manual: bool,
    /// Item 3: an accountable manager is nominated.
    pub leadership_nomination: bool,
    /// Item 4: at least one infrastructure facility has images.
    pub infrastructure_setup: bool,
    /// Item 5: regulatory display images are uploaded.
    pub regulatory_display: bool,
    /// Item 6: the system design document is uploaded.
    pub system_design: bool,
    /// Item 7: the organization has at least one subcontractor agreement.
    pub subcontractor_agreement: bool,
    /// Item 8: hardware security images are uploaded.
    pub hardware_security: bool,
    /// Item 9: the web portal link is set.
    pub web_portal: bool,
    /// Item 10: at least one unit has been manufactured.
    pub manufactured_units: bool,
}

impl OneTimeChecklist {
    /// Items with their display labels, in the fixed checklist order.
    pub fn items(&self) -> [(&'static str, bool); 10] {
        [
            ("Organizational Manual", self.organizational_manual),
            ("Training Procedure Manual", self.training_procedure_manual),
            ("Nomination of Leadership", self.leadership_nomination),
            ("Infrastructure Setup", self.infrastructure_setup),
            ("Regulatory Display", self.regulatory_display),
            ("System Design", self.system_design),
            ("Sub-contractors Agreement", self.subcontractor_agreement),
            ("Hardware Security", self.hardware_security),
            ("Web Portal", self.web_portal),
            ("Manufactured Units", self.manufactured_units),
        ]
    }

    /// Count of complete items.
    pub fn completed_count(&self) -> usize {
        self.items().iter().filter(|(_, complete)| *complete).count()
    }
}

/// Derives the one-time checklist from a drone snapshot and the org-wide
/// rosters.
///
/// Items 1 and 7 are organization-level checks: any roster member satisfies
/// the organizational manual item and any subcontractor anywhere in the
/// organization satisfies the agreement item. Subcontractors are org-wide
/// facts, not per-drone relations.
pub fn compute_one_time_checklist(
    drone: &entity::drone::Model,
    team_members: &[entity::team_member::Model],
    subcontractors: &[entity::subcontractor::Model],
) -> OneTimeChecklist {
    let uploads = &drone.uploads;

    OneTimeChecklist {
        organizational_manual: !team_members.is_empty(),
        training_procedure_manual: uploads.training_manual.is_some(),
        leadership_nomination: drone.accountable_manager_id.is_some(),
        infrastructure_setup: !uploads.infrastructure_manufacturing.is_empty()
            || !uploads.infrastructure_testing.is_empty()
            || !uploads.infrastructure_office.is_empty(),
        regulatory_display: !uploads.regulatory_display.is_empty(),
        system_design: uploads.system_design.is_some(),
        subcontractor_agreement: !subcontractors.is_empty(),
        hardware_security: !uploads.hardware_security.is_empty(),
        web_portal: uploads.web_portal_link.is_some(),
        manufactured_units: !drone.manufactured_units.0.is_empty(),
    }
}

/// Tri-state DGCA reporting status of the personnel category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonnelStatus {
    /// No personnel changes on record; satisfied.
    NoChange,
    /// Unreported personnel changes exist; pending.
    ReportToDgca,
    /// Personnel changes have been reported; done.
    DgcaNotified,
}

impl PersonnelStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoChange => "No Change",
            Self::ReportToDgca => "Report to DGCA",
            Self::DgcaNotified => "DGCA Notified",
        }
    }
}

/// Derives the personnel status.
///
/// The stored reported flag is ignored whenever the list is empty; an empty
/// list is always "No Change".
pub fn personnel_status(data: &RecurringData) -> PersonnelStatus {
    if data.personnel.is_empty() {
        PersonnelStatus::NoChange
    } else if data.personnel_reported {
        PersonnelStatus::DgcaNotified
    } else {
        PersonnelStatus::ReportToDgca
    }
}
