pub mod domain_name;
