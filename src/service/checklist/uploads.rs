//! Upload slot and manufactured-unit mutation semantics.

use entity::drone::{DroneUploads, LabeledImage, ManufacturedUnit, ManufacturedUnits};

use crate::{
    error::validation::ValidationError,
    model::{checklist::UploadKind, drone::NewManufacturedUnitDto},
};

/// Applies an uploaded batch of file references to its slot.
///
/// Single-file kinds take `files[0]` and replace the stored reference;
/// multi-file kinds replace the whole list with the batch, so callers wanting
/// incremental behavior must submit the full desired set. The others gallery
/// is the one additive slot: it appends a single `{label, image}` pair and
/// silently ignores a call with an empty label or no files.
pub fn apply_upload(
    uploads: &mut DroneUploads,
    kind: UploadKind,
    files: Vec<String>,
    label: Option<String>,
) -> Result<(), ValidationError> {
    match kind {
        UploadKind::TrainingManual => {
            uploads.training_manual = Some(single_file(kind, files)?);
        }
        UploadKind::SystemDesign => {
            uploads.system_design = Some(single_file(kind, files)?);
        }
        UploadKind::InfrastructureManufacturing => {
            uploads.infrastructure_manufacturing = files;
        }
        UploadKind::InfrastructureTesting => {
            uploads.infrastructure_testing = files;
        }
        UploadKind::InfrastructureOffice => {
            uploads.infrastructure_office = files;
        }
        UploadKind::InfrastructureOthers => {
            let label = label.unwrap_or_default();
            if label.is_empty() {
                return Ok(());
            }
            let Some(image) = files.into_iter().next() else {
                return Ok(());
            };

            uploads.infrastructure_others.push(LabeledImage { label, image });
        }
        UploadKind::RegulatoryDisplay => {
            uploads.regulatory_display = files;
        }
        UploadKind::HardwareSecurity => {
            uploads.hardware_security = files;
        }
    }

    Ok(())
}

fn single_file(kind: UploadKind, files: Vec<String>) -> Result<String, ValidationError> {
    files
        .into_iter()
        .next()
        .ok_or(ValidationError::EmptyUploadBatch {
            kind: kind.as_str(),
        })
}

/// Replaces the web portal link. Any string is accepted; URL format
/// validation belongs to the presentation layer.
pub fn set_web_portal(uploads: &mut DroneUploads, url: String) {
    uploads.web_portal_link = Some(url);
}

/// Builds the replacement manufactured-unit list from submitted units.
///
/// Serial numbers and UINs must be non-empty; serial numbers are not checked
/// for global uniqueness. The whole list replaces the stored one, matching
/// the add-one-unit UI flow that reads, appends client-side, and resubmits.
pub fn replace_units(
    units: Vec<NewManufacturedUnitDto>,
) -> Result<ManufacturedUnits, ValidationError> {
    let mut replacement = Vec::with_capacity(units.len());

    for unit in units {
        if unit.serial_number.is_empty() {
            return Err(ValidationError::EmptyUnitField {
                field: "serial number",
            });
        }
        if unit.uin.is_empty() {
            return Err(ValidationError::EmptyUnitField { field: "UIN" });
        }

        replacement.push(ManufacturedUnit {
            serial_number: unit.serial_number,
            uin: unit.uin,
        });
    }

    Ok(ManufacturedUnits(replacement))
}
