use backoffice_auth::Role;

use crate::{CrudService, Resource, Routes};

impl Resource for Role {
    const NAME: &'static str = "role";

    const ROUTES: Routes = Routes {
        list: "/org/role/all",
        by_id: "/org/role",
        save: "/org/role/save",
        delete: "/org/role/delete",
    };
}

pub type RoleService = CrudService<Role>;
