/// Static credits shown by the information panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: &'static str,
    pub sources: &'static [(&'static str, &'static str)],
    pub author: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const SITE_INFO: SiteInfo = SiteInfo {
    title: "Site Information",
    sources: &[
        ("Weather", "WeatherAPI"),
        ("Images", "Unsplash API"),
        ("Backend", "Custom Python API"),
    ],
    author: "Nathan Snook",
    links: &[
        ("Portfolio", "https://w0418773.github.io/"),
        ("GitHub", "https://github.com/w0418773/"),
    ],
};
