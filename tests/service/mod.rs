mod drone;
mod order;
mod report;
