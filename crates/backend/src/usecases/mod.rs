pub mod u508_beneficiary_reports;
