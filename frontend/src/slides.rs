use serde::Deserialize;
use log::error;

const DECK_JSON: &str = include_str!("../assets/slides.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SlideCaption {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub src: String,
    pub top: String,
    pub bottom_left: SlideCaption,
    pub bottom_right: String,
}

pub fn parse_slides(json: &str) -> Result<Vec<Slide>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Loads the bundled slide deck. A broken deck renders as an empty,
/// static carousel instead of taking the page down.
pub fn load_slides() -> Vec<Slide> {
    match parse_slides(DECK_JSON) {
        Ok(slides) => slides,
        Err(e) => {
            error!("Failed to parse slide deck: {}", e);
            Vec::new()
        }
    }
}
