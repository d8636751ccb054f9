mod handler;

pub use handler::{
    create_family_member, delete_family_member, get_family_member, list_family_members,
};
