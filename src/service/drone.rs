//! Drone snapshot reads and checklist mutations.
//!
//! Every mutation follows the same shape: load the drone, check the caller's
//! version token against the loaded row, run the pure engine mutation on the
//! loaded aggregate, then persist it with a conditional write. A failed
//! condition after a successful read means another writer got in between, and
//! the caller receives a conflict rather than a silent lost update.

use sea_orm::DatabaseConnection;

use crate::{
    data::{DroneRepository, SubcontractorRepository, TeamMemberRepository},
    error::Error,
    model::{
        checklist::{
            CategoryStatusDto, ChecklistItemDto, OneTimeChecklistDto, PersonnelStatusDto,
            RecurringCategory, RecurringStatusDto,
        },
        drone::{
            AppendRecurringDto, AssignManagerDto, CreateDroneDto, DroneChecklistDto, DroneDto,
            UpdateUnitsDto, UpdateUploadsDto, UpdateWebPortalDto,
        },
    },
    service::checklist::{badge, recurring, status, uploads},
};

/// Service for drone registration and checklist mutations.
pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneService<'a> {
    /// Creates a new instance of [`DroneService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new drone and returns it with its (entirely incomplete)
    /// derived checklist.
    pub async fn create(
        &self,
        organization_id: i32,
        dto: CreateDroneDto,
    ) -> Result<DroneChecklistDto, Error> {
        let drone_repo = DroneRepository::new(self.db);

        let drone = drone_repo
            .create(organization_id, &dto.model_name, dto.image)
            .await?;

        self.to_checklist_dto(drone).await
    }

    /// Lists an organization's drones without derived state.
    pub async fn list(&self, organization_id: i32) -> Result<Vec<DroneDto>, Error> {
        let drone_repo = DroneRepository::new(self.db);

        let drones = drone_repo.list(organization_id).await?;

        Ok(drones.into_iter().map(DroneDto::from).collect())
    }

    /// Fetches a drone snapshot with its derived checklist state.
    pub async fn get_checklist(&self, drone_id: i32) -> Result<DroneChecklistDto, Error> {
        let drone = self.load(drone_id).await?;

        self.to_checklist_dto(drone).await
    }

    /// Deletes a drone.
    pub async fn delete(&self, drone_id: i32) -> Result<(), Error> {
        let drone_repo = DroneRepository::new(self.db);

        let result = drone_repo.delete(drone_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Drone", drone_id));
        }

        Ok(())
    }

    /// Nominates the accountable manager; re-assignment overwrites.
    pub async fn assign_manager(
        &self,
        drone_id: i32,
        dto: AssignManagerDto,
    ) -> Result<DroneChecklistDto, Error> {
        let drone_repo = DroneRepository::new(self.db);
        let drone = self.load(drone_id).await?;
        ensure_version(&drone, dto.version)?;

        let updated = drone_repo
            .set_accountable_manager(drone_id, dto.version, Some(dto.manager_id))
            .await?;

        self.committed(updated, drone_id, dto.version).await
    }

    /// Applies an uploaded batch to its slot per the engine's replacement
    /// semantics.
    pub async fn update_uploads(
        &self,
        drone_id: i32,
        dto: UpdateUploadsDto,
    ) -> Result<DroneChecklistDto, Error> {
        let drone_repo = DroneRepository::new(self.db);
        let drone = self.load(drone_id).await?;
        ensure_version(&drone, dto.version)?;

        let mut new_uploads = drone.uploads.clone();
        uploads::apply_upload(&mut new_uploads, dto.kind, dto.files, dto.label)?;

        let updated = drone_repo
            .set_uploads(drone_id, dto.version, new_uploads)
            .await?;

        self.committed(updated, drone_id, dto.version).await
    }

    /// Replaces the web portal link.
    pub async fn update_web_portal(
        &self,
        drone_id: i32,
        dto: UpdateWebPortalDto,
    ) -> Result<DroneChecklistDto, Error> {
        let drone_repo = DroneRepository::new(self.db);
        let drone = self.load(drone_id).await?;
        ensure_version(&drone, dto.version)?;

        let mut new_uploads = drone.uploads.clone();
        uploads::set_web_portal(&mut new_uploads, dto.url);

        let updated = drone_repo
            .set_uploads(drone_id, dto.version, new_uploads)
            .await?;

        self.committed(updated, drone_id, dto.version).await
    }

    /// Replaces the manufactured-unit list with the submitted one.
    pub async fn update_units(
        &self,
        drone_id: i32,
        dto: UpdateUnitsDto,
    ) -> Result<DroneChecklistDto, Error> {
        let drone_repo = DroneRepository::new(self.db);
        let drone = self.load(drone_id).await?;
        ensure_version(&drone, dto.version)?;

        let units = uploads::replace_units(dto.units)?;

        let updated = drone_repo
            .set_manufactured_units(drone_id, dto.version, units)
            .await?;

        self.committed(updated, drone_id, dto.version).await
    }

    /// Validates and appends one recurring record.
    pub async fn append_recurring(
        &self,
        drone_id: i32,
        dto: AppendRecurringDto,
    ) -> Result<DroneChecklistDto, Error> {
        let drone_repo = DroneRepository::new(self.db);
        let drone = self.load(drone_id).await?;
        ensure_version(&drone, dto.version)?;

        let mut data = drone.recurring_data.clone();
        recurring::append(&mut data, dto.record)?;

        let updated = drone_repo
            .set_recurring_data(drone_id, dto.version, data)
            .await?;

        self.committed(updated, drone_id, dto.version).await
    }

    /// Deletes the recurring record at the given display index.
    pub async fn delete_recurring(
        &self,
        drone_id: i32,
        category: RecurringCategory,
        index: usize,
        version: i32,
    ) -> Result<DroneChecklistDto, Error> {
        let drone_repo = DroneRepository::new(self.db);
        let drone = self.load(drone_id).await?;
        ensure_version(&drone, version)?;

        let mut data = drone.recurring_data.clone();
        recurring::delete_at(&mut data, category, index)?;

        let updated = drone_repo
            .set_recurring_data(drone_id, version, data)
            .await?;

        self.committed(updated, drone_id, version).await
    }

    /// Marks the personnel changes as reported to the DGCA.
    pub async fn mark_personnel_reported(
        &self,
        drone_id: i32,
        version: i32,
    ) -> Result<DroneChecklistDto, Error> {
        let drone_repo = DroneRepository::new(self.db);
        let drone = self.load(drone_id).await?;
        ensure_version(&drone, version)?;

        let mut data = drone.recurring_data.clone();
        recurring::mark_personnel_reported(&mut data);

        let updated = drone_repo
            .set_recurring_data(drone_id, version, data)
            .await?;

        self.committed(updated, drone_id, version).await
    }

    async fn load(&self, drone_id: i32) -> Result<entity::drone::Model, Error> {
        DroneRepository::new(self.db)
            .get(drone_id)
            .await?
            .ok_or(Error::NotFound("Drone", drone_id))
    }

    /// Resolves the outcome of a conditional aggregate write.
    async fn committed(
        &self,
        updated: Option<entity::drone::Model>,
        drone_id: i32,
        expected_version: i32,
    ) -> Result<DroneChecklistDto, Error> {
        match updated {
            Some(drone) => self.to_checklist_dto(drone).await,
            // No row matched: either the drone vanished or its version moved
            // between our read and write.
            None => match DroneRepository::new(self.db).get(drone_id).await? {
                Some(_) => Err(Error::Conflict {
                    drone_id,
                    expected_version,
                }),
                None => Err(Error::NotFound("Drone", drone_id)),
            },
        }
    }

    async fn to_checklist_dto(
        &self,
        drone: entity::drone::Model,
    ) -> Result<DroneChecklistDto, Error> {
        let team_members = TeamMemberRepository::new(self.db)
            .list(drone.organization_id)
            .await?;
        let subcontractors = SubcontractorRepository::new(self.db)
            .list(drone.organization_id)
            .await?;

        Ok(build_checklist_dto(drone, &team_members, &subcontractors))
    }
}

fn ensure_version(drone: &entity::drone::Model, version: i32) -> Result<(), Error> {
    if drone.version != version {
        return Err(Error::Conflict {
            drone_id: drone.id,
            expected_version: version,
        });
    }

    Ok(())
}

/// Builds the combined drone + derived checklist DTO from a snapshot.
pub fn build_checklist_dto(
    drone: entity::drone::Model,
    team_members: &[entity::team_member::Model],
    subcontractors: &[entity::subcontractor::Model],
) -> DroneChecklistDto {
    let checklist = status::compute_one_time_checklist(&drone, team_members, subcontractors);

    let one_time = OneTimeChecklistDto {
        items: checklist
            .items()
            .iter()
            .map(|(label, complete)| ChecklistItemDto {
                label: label.to_string(),
                complete: *complete,
            })
            .collect(),
        completed_count: checklist.completed_count(),
        total: 10,
    };

    let personnel = status::personnel_status(&drone.recurring_data);
    let recurring_status = RecurringStatusDto {
        personnel: PersonnelStatusDto {
            status: personnel.label().to_string(),
            badge: badge::badge_color(personnel.label()).as_str().to_string(),
        },
        categories: RecurringCategory::ALL
            .iter()
            .map(|category| {
                let entries = recurring::len(&drone.recurring_data, *category);
                CategoryStatusDto {
                    category: *category,
                    complete: entries > 0,
                    entries,
                }
            })
            .collect(),
    };

    DroneChecklistDto {
        drone: DroneDto::from(drone),
        one_time,
        recurring: recurring_status,
    }
}
