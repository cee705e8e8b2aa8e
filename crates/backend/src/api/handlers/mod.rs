// UseCase handlers (u5xx)
pub mod u508_beneficiary_reports;
