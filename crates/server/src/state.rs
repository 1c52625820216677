use std::sync::Arc;

use service::company::repository::CompanyRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CompanyRepository>,
}
