//! Resolution of activity image references

use std::collections::HashMap;

use crate::entities::Activity;

/// Static map from bundled image file names to their URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap {
    by_file: HashMap<String, String>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, file: impl Into<String>, url: impl Into<String>) -> Self {
        self.by_file.insert(file.into(), url.into());
        self
    }

    /// Build from asset paths, keyed by their last path segment.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let by_file = paths
            .into_iter()
            .map(Into::into)
            .filter_map(|path| {
                let file = path.rsplit('/').next()?.to_string();
                (!file.is_empty()).then_some((file, path))
            })
            .collect();
        Self { by_file }
    }

    pub fn url_for(&self, file: &str) -> Option<&str> {
        self.by_file.get(file).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_file.is_empty()
    }
}

/// URL to display for an activity's image, if any.
///
/// An uploaded data URI wins over a bundled file key.
pub fn resolve_image<'a>(activity: &'a Activity, assets: &'a AssetMap) -> Option<&'a str> {
    let image = activity.image.as_ref()?;

    if let Some(src) = image.src.as_deref().filter(|s| !s.is_empty()) {
        return Some(src);
    }

    image
        .file
        .as_deref()
        .filter(|f| !f.is_empty())
        .and_then(|file| assets.url_for(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ActivityImage, ActivitySource};
    use crate::value_objects::{Setting, TimeOfDay};

    fn activity_with(image: Option<ActivityImage>) -> Activity {
        let activity = Activity::new(
            "a",
            "Lek",
            Setting::Any,
            TimeOfDay::Any,
            ActivitySource::Base,
        );
        match image {
            Some(image) => activity.with_image(image),
            None => activity,
        }
    }

    #[test]
    fn resolves_bundled_file_through_asset_map() {
        let assets = AssetMap::from_paths(["/assets/activities/koja.png"]);
        let activity = activity_with(Some(ActivityImage::from_file("koja.png", "Koja")));
        assert_eq!(
            resolve_image(&activity, &assets),
            Some("/assets/activities/koja.png")
        );
    }

    #[test]
    fn data_uri_takes_precedence() {
        let assets = AssetMap::new().with_asset("koja.png", "/koja.png");
        let image = ActivityImage {
            alt: "Koja".into(),
            file: Some("koja.png".into()),
            src: Some("data:image/png;base64,AAAA".into()),
        };
        let activity = activity_with(Some(image));
        assert_eq!(
            resolve_image(&activity, &assets),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn unknown_file_or_no_image_resolves_to_none() {
        let assets = AssetMap::new();
        let missing = activity_with(Some(ActivityImage::from_file("saknas.png", "")));
        assert_eq!(resolve_image(&missing, &assets), None);
        assert_eq!(resolve_image(&activity_with(None), &assets), None);
    }
}
