pub mod contact;
pub mod enquiry_select;
pub mod header;
pub mod sections;
