/// Состояние запроса к API
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl ApiStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, ApiStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ApiStatus::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiStatus::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiStatus::Error)
    }
}
