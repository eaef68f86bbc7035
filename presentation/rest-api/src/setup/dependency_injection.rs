use std::sync::Arc;

use logger::TracingLogger;
use persistence::session::repository::PantrySessionRepositoryInMemory;

use business::application::pantry_item::expiry_alerts::GetExpiryAlertsUseCaseImpl;
use business::application::pantry_item::remove::RemoveFromInventoryUseCaseImpl;
use business::application::pantry_item::restore_out_of_stock::RestoreOutOfStockUseCaseImpl;
use business::application::session::end::EndSessionUseCaseImpl;
use business::application::session::get::GetSessionUseCaseImpl;
use business::application::session::start::StartSessionUseCaseImpl;
use business::application::shopping_item::add::AddToListUseCaseImpl;
use business::application::shopping_item::checkout::CheckoutUseCaseImpl;
use business::application::shopping_item::remove::RemoveFromListUseCaseImpl;
use business::application::shopping_item::resolve_pending::ResolvePendingUseCaseImpl;
use business::application::shopping_item::submit::SubmitItemUseCaseImpl;
use business::application::suggestion::generate::GenerateSuggestionsUseCaseImpl;
use business::domain::reference_data::ReferenceData;

use crate::config::pantry_config::PantryConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub session_api: crate::api::session::routes::SessionApi,
    pub shopping_list_api: crate::api::shopping_list::routes::ShoppingListApi,
    pub inventory_api: crate::api::inventory::routes::InventoryApi,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
}

impl DependencyContainer {
    pub fn new(config: &PantryConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let repository = Arc::new(PantrySessionRepositoryInMemory::new());
        let reference = Arc::new(ReferenceData::default());
        let policy = config.policy.clone();

        // Session use cases
        let start_use_case = Arc::new(StartSessionUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetSessionUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let end_use_case = Arc::new(EndSessionUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        // Shopping list use cases
        let submit_use_case = Arc::new(SubmitItemUseCaseImpl {
            repository: repository.clone(),
            reference: reference.clone(),
            logger: logger.clone(),
        });
        let resolve_pending_use_case = Arc::new(ResolvePendingUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddToListUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let remove_from_list_use_case = Arc::new(RemoveFromListUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        // Inventory use cases
        let remove_from_inventory_use_case = Arc::new(RemoveFromInventoryUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let restore_use_case = Arc::new(RestoreOutOfStockUseCaseImpl {
            repository: repository.clone(),
            policy: policy.clone(),
            logger: logger.clone(),
        });
        let expiry_alerts_use_case = Arc::new(GetExpiryAlertsUseCaseImpl {
            repository: repository.clone(),
            policy: policy.clone(),
            logger: logger.clone(),
        });

        // Suggestion use cases
        let generate_suggestions_use_case = Arc::new(GenerateSuggestionsUseCaseImpl {
            repository,
            reference,
            policy,
            logger,
        });

        let session_api = crate::api::session::routes::SessionApi::new(
            start_use_case,
            get_use_case,
            end_use_case,
            config.seed_sample_data,
        );

        let shopping_list_api = crate::api::shopping_list::routes::ShoppingListApi::new(
            submit_use_case,
            resolve_pending_use_case,
            add_use_case,
            remove_from_list_use_case,
            checkout_use_case,
            config.policy.clone(),
        );

        let inventory_api = crate::api::inventory::routes::InventoryApi::new(
            remove_from_inventory_use_case,
            restore_use_case,
            expiry_alerts_use_case,
        );

        let suggestion_api =
            crate::api::suggestion::routes::SuggestionApi::new(generate_suggestions_use_case);

        Self {
            health_api,
            session_api,
            shopping_list_api,
            inventory_api,
            suggestion_api,
        }
    }
}
