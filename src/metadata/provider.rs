//! Provider-agnostic metadata records consumed by the pipeline.

/// A lightweight search candidate, one possible match for a file.
///
/// Candidates live only for the duration of one interactive selection and
/// keep the relevance order returned by the metadata service.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    /// Release year, when the service reported a release date.
    pub year: Option<u16>,
}

/// The full record for a chosen candidate.
#[derive(Debug, Clone)]
pub struct MovieDetail {
    pub title: String,
    pub overview: Option<String>,
    /// `YYYY-MM-DD` release date as reported by the service.
    pub release_date: Option<String>,
    /// Genres in service order; the first one is the primary genre.
    pub genres: Vec<String>,
    /// Cast member names in billing order.
    pub cast: Vec<String>,
    /// Poster path fragment for the image CDN, when one exists.
    pub poster_path: Option<String>,
}

/// Extract a four-digit year from a date string like `"1999-03-31"`.
pub fn parse_year(date: Option<&str>) -> Option<u16> {
    date.and_then(|d| d.get(..4)).and_then(|y| y.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_parsing() {
        assert_eq!(parse_year(Some("1999-03-31")), Some(1999));
        assert_eq!(parse_year(Some("2023")), Some(2023));
        assert_eq!(parse_year(Some("")), None);
        assert_eq!(parse_year(Some("n/a")), None);
        assert_eq!(parse_year(None), None);
    }
}
