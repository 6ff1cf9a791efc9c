use url::form_urlencoded;

use crate::config::WORK_QUERY_KEY;
use crate::models::work_models::WorkFilter;

/// Filter encoded in a query string (with or without the leading `?`).
/// Missing or unknown values fall back to the default filter.
pub fn filter_from_query(query: &str) -> WorkFilter {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == WORK_QUERY_KEY)
        .and_then(|(_, value)| WorkFilter::from_query_value(&value))
        .unwrap_or_default()
}

/// Rewrites `query` so it carries `filter`, keeping every other parameter.
/// The default filter removes the parameter instead of writing it. The result
/// has no leading `?`.
///
/// The whole query is re-serialized in form encoding, so other parameters
/// keep their order and values but not their spelling: a bare `debug` comes
/// back as `debug=` and `%20` comes back as `+`.
pub fn query_with_filter(query: &str, filter: WorkFilter) -> String {
    let mut replaced = false;
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        if key != WORK_QUERY_KEY {
            serializer.append_pair(&key, &value);
        } else if !filter.is_default() && !replaced {
            serializer.append_pair(WORK_QUERY_KEY, filter.label());
            replaced = true;
        }
    }
    if !filter.is_default() && !replaced {
        serializer.append_pair(WORK_QUERY_KEY, filter.label());
    }
    serializer.finish()
}

/// `path`, plus `?query` when there is one, plus the hash as given.
pub fn compose_url(path: &str, query: &str, hash: &str) -> String {
    let mut url = path.to_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url.push_str(hash);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_filter_round_trips() {
        for filter in WorkFilter::ALL {
            let query = query_with_filter("", filter);
            assert_eq!(filter_from_query(&query), filter);
        }
    }

    #[test]
    fn default_filter_removes_the_parameter() {
        assert_eq!(query_with_filter("?work=Motos", WorkFilter::Todos), "");
        assert_eq!(query_with_filter("work=Motos&ref=ig", WorkFilter::Todos), "ref=ig");
    }

    #[test]
    fn other_filters_are_written_verbatim() {
        assert_eq!(query_with_filter("", WorkFilter::Retrato), "work=Retrato");
        assert_eq!(query_with_filter("ref=ig&work=Autos", WorkFilter::Motos), "ref=ig&work=Motos");
        assert_eq!(query_with_filter("work=Autos&work=Motos", WorkFilter::Retrato), "work=Retrato");
    }

    #[test]
    fn other_parameters_are_form_encoded() {
        assert_eq!(
            query_with_filter("?debug&q=red%20bike", WorkFilter::Motos),
            "debug=&q=red+bike&work=Motos"
        );
        assert_eq!(query_with_filter("debug&work=Motos", WorkFilter::Todos), "debug=");
    }

    #[test]
    fn invalid_values_fall_back_to_default() {
        assert_eq!(filter_from_query("?work=Barcos"), WorkFilter::Todos);
        assert_eq!(filter_from_query("?work="), WorkFilter::Todos);
        assert_eq!(filter_from_query("?ref=ig"), WorkFilter::Todos);
        assert_eq!(filter_from_query(""), WorkFilter::Todos);
        assert_eq!(filter_from_query("?ref=ig&work=Motos"), WorkFilter::Motos);
    }

    #[test]
    fn compose_url_keeps_canonical_form() {
        assert_eq!(compose_url("/", "", ""), "/");
        assert_eq!(compose_url("/", "work=Motos", "#work"), "/?work=Motos#work");
    }
}
