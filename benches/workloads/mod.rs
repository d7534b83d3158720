pub mod churn;
pub mod growth;
pub mod micro;
