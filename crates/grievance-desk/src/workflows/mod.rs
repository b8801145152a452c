pub mod grievance;
