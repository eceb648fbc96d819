use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Auth,
    Carts,
    Health,
    Images,
    Orders,
    Products,
}
