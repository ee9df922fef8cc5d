use std::sync::Arc;

use crate::models::{Category, Place};
use crate::store::{
    CategoryStore, MemoryCategoryStore, MemoryPlaceStore, MemoryUserStore, PlaceStore, UserStore,
};

/// Shared handler dependencies, constructed once at startup and injected
/// through the router. Stores sit behind trait objects so the backend can
/// be swapped without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub places: Arc<dyn PlaceStore>,
    pub types: Arc<dyn CategoryStore>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Empty place/category stores plus the provisioned user accounts.
    pub fn in_memory() -> Self {
        Self {
            places: Arc::new(MemoryPlaceStore::new()),
            types: Arc::new(MemoryCategoryStore::new()),
            users: Arc::new(MemoryUserStore::with_samples()),
        }
    }

    /// Like `in_memory` but with demo places and categories, for running
    /// the server against nothing.
    pub fn with_sample_data() -> Self {
        let categories = vec![
            Category {
                type_id: Some("T0001".to_string()),
                type_name: "Education".to_string(),
            },
            Category {
                type_id: Some("T0002".to_string()),
                type_name: "Shopping".to_string(),
            },
            Category {
                type_id: Some("T0004".to_string()),
                type_name: "Hotel".to_string(),
            },
        ];

        let places = vec![
            Place {
                place_id: Some("A0000001".to_string()),
                place_name: "Chulalongkorn university".to_string(),
                place_type: "T0001".to_string(),
                latitude: 13.7419273,
                longitude: 100.5256927,
                starred: true,
                picture_url: Some(
                    "https://img.wongnai.com/p/1920x0/2016/07/04/f0a2624263f34d3bb469c5553b48e014.jpg"
                        .to_string(),
                ),
            },
            Place {
                place_id: Some("A0000002".to_string()),
                place_name: "The old siam".to_string(),
                place_type: "T0002".to_string(),
                latitude: 13.7492849,
                longitude: 100.4989994,
                starred: false,
                picture_url: Some("http://www.theoldsiam.co.th/images/banner_07.jpg".to_string()),
            },
            Place {
                place_id: Some("A0000003".to_string()),
                place_name: "Bobae Tower".to_string(),
                place_type: "T0002".to_string(),
                latitude: 13.7492849,
                longitude: 100.4989994,
                starred: false,
                picture_url: None,
            },
            Place {
                place_id: Some("A0000004".to_string()),
                place_name: "Grand china hotel".to_string(),
                place_type: "T0004".to_string(),
                latitude: 13.7423837,
                longitude: 100.5075352,
                starred: true,
                picture_url: Some(
                    "https://q-ak.bstatic.com/images/hotel/max1280x900/563/56326449.jpg".to_string(),
                ),
            },
        ];

        Self {
            places: Arc::new(MemoryPlaceStore::seeded(places)),
            types: Arc::new(MemoryCategoryStore::seeded(categories)),
            users: Arc::new(MemoryUserStore::with_samples()),
        }
    }
}
