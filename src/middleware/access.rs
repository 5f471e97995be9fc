use http::Method;

use crate::models::Role;

const EVERYONE: &[Role] = &[Role::Admin, Role::User];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListProducts,
    GetProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    ExportProducts,
    ListLeftovers,
}

/// Method, route pattern and the operation it serves.
const ROUTES: &[(&str, &str, Operation)] = &[
    ("GET", "/api/products", Operation::ListProducts),
    ("GET", "/api/products/{id}", Operation::GetProduct),
    ("POST", "/api/products/", Operation::CreateProduct),
    ("PUT", "/api/products/{id}", Operation::UpdateProduct),
    ("DELETE", "/api/products/{id}", Operation::DeleteProduct),
    ("POST", "/api/products/export", Operation::ExportProducts),
    ("GET", "/api/products/leftovers", Operation::ListLeftovers),
];

impl Operation {
    pub fn resolve(method: &Method, route: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(m, r, _)| *m == method.as_str() && *r == route)
            .map(|(_, _, operation)| *operation)
    }

    pub fn required_roles(self) -> &'static [Role] {
        match self {
            Operation::ListProducts
            | Operation::GetProduct
            | Operation::ExportProducts
            | Operation::ListLeftovers => EVERYONE,
            Operation::CreateProduct | Operation::UpdateProduct | Operation::DeleteProduct => {
                ADMIN_ONLY
            }
        }
    }

    pub fn permits(self, role: Role) -> bool {
        self.required_roles().contains(&role)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::ListProducts => "list-products",
            Operation::GetProduct => "get-product",
            Operation::CreateProduct => "create-product",
            Operation::UpdateProduct => "update-product",
            Operation::DeleteProduct => "delete-product",
            Operation::ExportProducts => "export-products",
            Operation::ListLeftovers => "list-leftovers",
        }
    }
}
