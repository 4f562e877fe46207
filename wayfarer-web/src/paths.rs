//! Static asset URLs under the deployment base path.
//!
//! `PUBLIC_URL` (read at compile time, e.g. `/trip` on a project page) is
//! prepended to every bundled asset. Without it assets are served from `/`.

const EXTERNAL_PREFIXES: [&str; 5] = ["http://", "https://", "//", "data:", "blob:"];

/// URL of a bundled asset, relative to the deployment root.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(option_env!("PUBLIC_URL").unwrap_or_default(), relative)
}

/// Resolve a day's image reference. Absolute and protocol URLs pass through
/// untouched; anything else is treated as a bundled asset.
#[must_use]
pub fn image_url(reference: &str) -> String {
    let reference = reference.trim();
    if EXTERNAL_PREFIXES
        .iter()
        .any(|prefix| reference.starts_with(prefix))
    {
        reference.to_string()
    } else {
        asset_path(reference)
    }
}

fn join_base(base: &str, relative: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    url.push('/');
    url.push_str(relative.trim_start_matches('/'));
    url
}

#[cfg(test)]
mod tests {
    use super::{asset_path, image_url, join_base};

    #[test]
    fn assets_are_root_anchored_without_base() {
        assert_eq!(asset_path("static/img/jaipur.jpg"), "/static/img/jaipur.jpg");
        assert_eq!(asset_path("/static/img/jaipur.jpg"), "/static/img/jaipur.jpg");
    }

    #[test]
    fn base_path_is_joined_with_one_slash() {
        assert_eq!(join_base("/trip/", "static/img/jaipur.jpg"), "/trip/static/img/jaipur.jpg");
        assert_eq!(join_base("/trip", "/static/img/a.jpg"), "/trip/static/img/a.jpg");
        assert_eq!(join_base("", "a.jpg"), "/a.jpg");
    }

    #[test]
    fn external_images_pass_through() {
        assert_eq!(
            image_url("https://images.example.com/udaipur.jpg"),
            "https://images.example.com/udaipur.jpg"
        );
        assert_eq!(image_url("//cdn.example.com/a.png"), "//cdn.example.com/a.png");
        assert_eq!(image_url(" static/img/a.jpg "), "/static/img/a.jpg");
    }
}
