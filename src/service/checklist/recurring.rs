//! Recurring compliance record mutations.
//!
//! Appends validate the category's required fields and normalize conditional
//! ones before anything is written; deletes address records by their 0-based
//! display index and are strictly bounds-checked. Any mutation of the
//! personnel list forces the reported flag back to false.

use entity::drone::{
    BatterySafetyRecord, EquipmentMaintenanceRecord, MaterialProcurementRecord, OperationalRecord,
    PersonnelRecord, RecurringData, StaffCompetenceRecord, TrainingRecord, UasSoldRecord,
    UinOperation,
};
use uuid::Uuid;

use crate::{
    error::validation::ValidationError,
    model::checklist::{NewRecurringRecord, RecurringCategory},
};

/// Number of records currently stored in a category list.
pub fn len(data: &RecurringData, category: RecurringCategory) -> usize {
    match category {
        RecurringCategory::Personnel => data.personnel.len(),
        RecurringCategory::StaffCompetence => data.staff_competence.len(),
        RecurringCategory::TrainingRecords => data.training_records.len(),
        RecurringCategory::EquipmentMaintenance => data.equipment_maintenance.len(),
        RecurringCategory::BatterySafety => data.battery_safety.len(),
        RecurringCategory::OperationalRecords => data.operational_records.len(),
        RecurringCategory::MaterialProcurement => data.material_procurement.len(),
        RecurringCategory::UasSold => data.uas_sold.len(),
    }
}

/// Validates and appends one recurring record.
///
/// Records are appended to the end of their category list; insertion order is
/// the display order and the implicit index space for deletion. A fresh uuid
/// is assigned to the stored record. Appending a personnel record resets the
/// reported flag regardless of its prior value; no other category touches it.
pub fn append(data: &mut RecurringData, record: NewRecurringRecord) -> Result<(), ValidationError> {
    let category = record.category().as_str();

    match record {
        NewRecurringRecord::Personnel {
            date,
            position,
            previous,
            new,
        } => {
            require(category, "date", &date)?;
            require(category, "position", &position)?;

            data.personnel.push(PersonnelRecord {
                id: new_id(),
                date,
                position,
                previous,
                new,
            });
            data.personnel_reported = false;
        }
        NewRecurringRecord::StaffCompetence {
            date,
            staff,
            result,
        } => {
            require(category, "date", &date)?;
            require(category, "staff", &staff)?;

            data.staff_competence.push(StaffCompetenceRecord {
                id: new_id(),
                date,
                staff,
                result,
            });
        }
        NewRecurringRecord::TrainingRecords { date, session } => {
            require(category, "date", &date)?;
            require(category, "session", &session)?;

            data.training_records.push(TrainingRecord {
                id: new_id(),
                date,
                session,
            });
        }
        NewRecurringRecord::EquipmentMaintenance { date, equipment } => {
            require(category, "date", &date)?;
            require(category, "equipment", &equipment)?;

            data.equipment_maintenance.push(EquipmentMaintenanceRecord {
                id: new_id(),
                date,
                equipment,
            });
        }
        NewRecurringRecord::BatterySafety {
            date,
            tested_item,
            item_id,
            condition,
        } => {
            require(category, "date", &date)?;
            require(category, "itemId", &item_id)?;
            require(category, "condition", &condition)?;

            // For batteries the item id is the org battery composite key; the
            // selector UI constrains it and the engine persists it as given.
            data.battery_safety.push(BatterySafetyRecord {
                id: new_id(),
                date,
                tested_item,
                item_id,
                condition,
            });
        }
        NewRecurringRecord::OperationalRecords {
            date,
            operation,
            uin,
            serial_number,
            transferred_to,
        } => {
            require(category, "date", &date)?;
            require(category, "uin", &uin)?;

            // Conditional fields: required for their own operation type,
            // dropped for every other so the stored record stays canonical.
            let (serial_number, transferred_to) = match operation {
                UinOperation::UinIssuance => (None, None),
                UinOperation::TransferOfUin => {
                    let transferred_to = require_some(category, "transferredTo", transferred_to)?;
                    (None, Some(transferred_to))
                }
                UinOperation::LinkingUinToSerial => {
                    let serial_number = require_some(category, "serialNumber", serial_number)?;
                    (Some(serial_number), None)
                }
            };

            data.operational_records.push(OperationalRecord {
                id: new_id(),
                date,
                operation,
                uin,
                serial_number,
                transferred_to,
            });
        }
        NewRecurringRecord::MaterialProcurement {
            date,
            material,
            quantity,
            vendor,
        } => {
            require(category, "date", &date)?;
            require(category, "material", &material)?;

            data.material_procurement.push(MaterialProcurementRecord {
                id: new_id(),
                date,
                material,
                quantity,
                vendor,
            });
        }
        NewRecurringRecord::UasSold {
            date,
            unit_serial_number,
            sold_to,
        } => {
            require(category, "date", &date)?;
            require(category, "unitSerialNumber", &unit_serial_number)?;
            require(category, "soldTo", &sold_to)?;

            data.uas_sold.push(UasSoldRecord {
                id: new_id(),
                date,
                unit_serial_number,
                sold_to,
            });
        }
    }

    Ok(())
}

/// Deletes the record at `index` from a category list.
///
/// Training and equipment-maintenance records are an immutable audit trail
/// and define no delete. Deleting a personnel record is itself an unreported
/// change, so the reported flag is forced back to false.
pub fn delete_at(
    data: &mut RecurringData,
    category: RecurringCategory,
    index: usize,
) -> Result<(), ValidationError> {
    let list_len = len(data, category);

    if matches!(
        category,
        RecurringCategory::TrainingRecords | RecurringCategory::EquipmentMaintenance
    ) {
        return Err(ValidationError::DeleteNotSupported {
            category: category.as_str(),
        });
    }

    if index >= list_len {
        return Err(ValidationError::IndexOutOfBounds {
            category: category.as_str(),
            index,
            len: list_len,
        });
    }

    match category {
        RecurringCategory::Personnel => {
            data.personnel.remove(index);
            data.personnel_reported = false;
        }
        RecurringCategory::StaffCompetence => {
            data.staff_competence.remove(index);
        }
        RecurringCategory::BatterySafety => {
            data.battery_safety.remove(index);
        }
        RecurringCategory::OperationalRecords => {
            data.operational_records.remove(index);
        }
        RecurringCategory::MaterialProcurement => {
            data.material_procurement.remove(index);
        }
        RecurringCategory::UasSold => {
            data.uas_sold.remove(index);
        }
        RecurringCategory::TrainingRecords | RecurringCategory::EquipmentMaintenance => {
            unreachable!("rejected above")
        }
    }

    Ok(())
}

/// Marks the personnel changes as reported to the DGCA.
///
/// Meaningful once the personnel list is non-empty, but deliberately has no
/// precondition at this layer; the UI gates visibility of the action.
pub fn mark_personnel_reported(data: &mut RecurringData) {
    data.personnel_reported = true;
}

fn require(
    category: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField { category, field });
    }

    Ok(())
}

fn require_some(
    category: &'static str,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField { category, field }),
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use entity::drone::{RecurringData, TestedItem, UinOperation};

    use crate::{
        error::validation::ValidationError,
        model::checklist::{NewRecurringRecord, RecurringCategory},
        service::checklist::status::{personnel_status, PersonnelStatus},
    };

    use super::{append, delete_at, mark_personnel_reported};

    fn personnel_record() -> NewRecurringRecord {
        NewRecurringRecord::Personnel {
            date: "2026-01-01".to_string(),
            position: "Pilot".to_string(),
            previous: Some("A".to_string()),
            new: Some("B".to_string()),
        }
    }

    /// Expect a personnel append to reset the reported flag from true
    #[test]
    fn test_personnel_append_resets_reported() {
        let mut data = RecurringData {
            personnel_reported: true,
            ..Default::default()
        };

        append(&mut data, personnel_record()).unwrap();

        assert_eq!(data.personnel.len(), 1);
        assert!(!data.personnel_reported);
        assert_eq!(personnel_status(&data), PersonnelStatus::ReportToDgca);
    }

    /// Expect appends to other categories to leave the reported flag untouched
    #[test]
    fn test_other_appends_do_not_touch_reported() {
        let mut data = RecurringData {
            personnel_reported: true,
            ..Default::default()
        };

        append(
            &mut data,
            NewRecurringRecord::MaterialProcurement {
                date: "2026-03-01".to_string(),
                material: "Carbon frames".to_string(),
                quantity: None,
                vendor: None,
            },
        )
        .unwrap();

        assert!(data.personnel_reported);
    }

    /// Expect the append/report/delete round trip to land back on "No Change"
    #[test]
    fn test_personnel_report_round_trip() {
        let mut data = RecurringData::default();
        assert_eq!(personnel_status(&data), PersonnelStatus::NoChange);

        append(&mut data, personnel_record()).unwrap();
        assert_eq!(personnel_status(&data), PersonnelStatus::ReportToDgca);

        mark_personnel_reported(&mut data);
        assert_eq!(personnel_status(&data), PersonnelStatus::DgcaNotified);

        delete_at(&mut data, RecurringCategory::Personnel, 0).unwrap();
        assert!(data.personnel.is_empty());
        assert!(!data.personnel_reported);
        assert_eq!(personnel_status(&data), PersonnelStatus::NoChange);
    }

    /// Expect a missing required field to reject the append with no change
    #[test]
    fn test_append_rejects_empty_required_field() {
        let mut data = RecurringData::default();

        let result = append(
            &mut data,
            NewRecurringRecord::Personnel {
                date: "2026-01-01".to_string(),
                position: String::new(),
                previous: None,
                new: None,
            },
        );

        assert_eq!(
            result,
            Err(ValidationError::MissingField {
                category: "personnel",
                field: "position"
            })
        );
        assert!(data.personnel.is_empty());
    }

    /// Expect list length to be a strict upper bound on delete indices
    #[test]
    fn test_delete_rejects_out_of_bounds_index() {
        let mut data = RecurringData::default();
        append(&mut data, personnel_record()).unwrap();

        let result = delete_at(&mut data, RecurringCategory::Personnel, 1);

        assert_eq!(
            result,
            Err(ValidationError::IndexOutOfBounds {
                category: "personnel",
                index: 1,
                len: 1
            })
        );
        assert_eq!(data.personnel.len(), 1);
    }

    /// Expect the audit-trail categories to refuse deletion
    #[test]
    fn test_audit_trail_categories_refuse_delete() {
        let mut data = RecurringData::default();
        append(
            &mut data,
            NewRecurringRecord::TrainingRecords {
                date: "2026-02-10".to_string(),
                session: "Monsoon ops refresher".to_string(),
            },
        )
        .unwrap();

        let result = delete_at(&mut data, RecurringCategory::TrainingRecords, 0);

        assert_eq!(
            result,
            Err(ValidationError::DeleteNotSupported {
                category: "trainingRecords"
            })
        );
        assert_eq!(data.training_records.len(), 1);
    }

    /// Expect a battery-safety item id to be persisted as given, matching an
    /// org battery or not
    #[test]
    fn test_battery_safety_item_id_not_cross_checked() {
        let mut data = RecurringData::default();

        append(
            &mut data,
            NewRecurringRecord::BatterySafety {
                date: "2026-02-15".to_string(),
                tested_item: TestedItem::Battery,
                item_id: "NO-SUCH-BATTERY".to_string(),
                condition: "Good".to_string(),
            },
        )
        .unwrap();

        assert_eq!(data.battery_safety[0].item_id, "NO-SUCH-BATTERY");
    }

    /// Expect a transfer record to keep the recipient and drop the serial
    #[test]
    fn test_transfer_record_normalizes_conditional_fields() {
        let mut data = RecurringData::default();

        append(
            &mut data,
            NewRecurringRecord::OperationalRecords {
                date: "2026-02-01".to_string(),
                operation: UinOperation::TransferOfUin,
                uin: "UIN-001".to_string(),
                serial_number: Some("SN-SHOULD-DROP".to_string()),
                transferred_to: Some("Buyer Co".to_string()),
            },
        )
        .unwrap();

        let record = &data.operational_records[0];
        assert!(record.serial_number.is_none());
        assert_eq!(record.transferred_to.as_deref(), Some("Buyer Co"));
    }

    /// Expect a linking record without a serial number to be rejected
    #[test]
    fn test_linking_record_requires_serial() {
        let mut data = RecurringData::default();

        let result = append(
            &mut data,
            NewRecurringRecord::OperationalRecords {
                date: "2026-02-01".to_string(),
                operation: UinOperation::LinkingUinToSerial,
                uin: "UIN-001".to_string(),
                serial_number: None,
                transferred_to: None,
            },
        );

        assert_eq!(
            result,
            Err(ValidationError::MissingField {
                category: "operationalRecords",
                field: "serialNumber"
            })
        );
        assert!(data.operational_records.is_empty());
    }
}
