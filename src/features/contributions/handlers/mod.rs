pub mod contribution_handler;

pub use contribution_handler::{
    __path_create_contribution, __path_get_contribution, __path_list_contributions,
    __path_my_contributions, __path_update_contribution, create_contribution, get_contribution,
    list_contributions, my_contributions, update_contribution,
};
