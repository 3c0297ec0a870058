use backoffice_auth::Right;

use crate::{CrudService, Resource, Routes};

impl Resource for Right {
    const NAME: &'static str = "right";

    const ROUTES: Routes = Routes {
        list: "/org/right/all",
        by_id: "/org/right",
        save: "/org/right/save",
        delete: "/org/right/delete",
    };
}

pub type RightService = CrudService<Right>;
