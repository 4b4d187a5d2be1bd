pub mod pr_model;
