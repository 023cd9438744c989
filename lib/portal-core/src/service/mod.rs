pub mod assessment;
pub mod dashboard;
pub mod deduction;
pub mod error;
pub mod history;
pub mod institution;
pub mod query;
pub mod session;
pub mod settings;
pub mod submission;
pub mod token;

#[cfg(test)]
pub mod test_utilities;
