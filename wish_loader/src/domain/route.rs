use url::Url;

/// How the loader reaches the wish list. Exactly one route is active per build/config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRoute {
    // Straight to the form backend.
    Direct,
    // Public pass-through relay taking the upstream as a `url` query parameter.
    CorsRelay { base: Url },
    // Our own relay endpoint, which already knows the upstream.
    OwnRelay { url: Url },
}

impl FetchRoute {
    pub fn target_url(&self, upstream: &Url) -> Url {
        match self {
            FetchRoute::Direct => upstream.clone(),
            FetchRoute::CorsRelay { base } => {
                let mut target = base.clone();
                target
                    .query_pairs_mut()
                    .append_pair("url", upstream.as_str());
                target
            }
            FetchRoute::OwnRelay { url } => url.clone(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FetchRoute::Direct => "direct",
            FetchRoute::CorsRelay { .. } => "cors-relay",
            FetchRoute::OwnRelay { .. } => "relay",
        }
    }
}
