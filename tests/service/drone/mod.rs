mod operational_records;
mod personnel_round_trip;
mod upload_flips_item;
mod version_conflict;
