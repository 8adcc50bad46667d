mod cross_reference;
mod dex;
mod resource_dex;

pub use cross_reference::{
    MoveKind,
    MoveUsers,
    move_kind,
    move_users,
    type_members,
};
pub use dex::Dex;
pub use resource_dex::{
    MoveDex,
    NamedResource,
    ResourceDex,
    SpeciesDex,
    TypeDex,
};
