use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use storage::cache::InMemoryImageCache;
use storage::client::StorageClient;
use storage::image_fetcher::StorageImageFetcher;
use storage::uploader::StorageImageUploader;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::image::fetch_image::FetchImageUseCaseImpl;
use business::application::order::get_all::GetOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::list_all::ListAllOrdersUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::domain::image::locator::StorageNamespace;

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub image_api: crate::api::image::routes::ImageApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub order_api: crate::api::order::routes::OrderApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        let storage_config = StorageConfig::from_env();
        std::fs::create_dir_all(&storage_config.scratch_dir)?;

        let namespace = StorageNamespace::new(&storage_config.public_base_url)?;
        let storage_client = Arc::new(StorageClient::new(
            storage_config.api_url,
            storage_config.bucket,
            storage_config.access_key,
            storage_config.access_secret,
        ));
        let image_cache = Arc::new(InMemoryImageCache::new());
        let image_fetcher = Arc::new(StorageImageFetcher::new(
            storage_client.clone(),
            namespace.clone(),
            storage_config.scratch_dir,
        ));
        let image_uploader = Arc::new(StorageImageUploader::new(
            storage_client,
            namespace.clone(),
        ));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_uploader,
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Image proxy use case
        let fetch_image_use_case = Arc::new(FetchImageUseCaseImpl {
            cache: image_cache,
            fetcher: image_fetcher,
            namespace,
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            repository: order_repository.clone(),
            cart_repository,
            product_repository,
            logger: logger.clone(),
        });
        let get_orders_use_case = Arc::new(GetOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let list_all_orders_use_case = Arc::new(ListAllOrdersUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(register_use_case, login_use_case);
        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );
        let image_api = crate::api::image::routes::ImageApi::new(fetch_image_use_case);
        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_cart_item_use_case,
            remove_cart_item_use_case,
            clear_cart_use_case,
        );
        let order_api = crate::api::order::routes::OrderApi::new(
            place_order_use_case,
            get_orders_use_case,
            get_order_by_id_use_case,
            update_order_status_use_case,
            list_all_orders_use_case,
        );

        Ok(Self {
            health_api,
            auth_api,
            product_api,
            image_api,
            cart_api,
            order_api,
        })
    }
}
