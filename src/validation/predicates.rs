use regex::Regex;

lazy_static! {
    static ref DATE_REGEX: Regex =
        Regex::new(r"^([0-9]{4})-(0?[1-9]|1[012])-(0?[1-9]|[12][0-9]|3[01])$").unwrap();
}

lazy_static! {
    static ref DATE_TIME_REGEX: Regex = Regex::new(concat!(
        r"^(?:[0-9]{4}-(?:(?:0[13578]|1[02])-(?:0[1-9]|[12][0-9]|3[01])",
        r"|(?:0[469]|11)-(?:0[1-9]|[12][0-9]|30)",
        r"|02-(?:0[1-9]|1[0-9]|2[0-8]))",
        r"|(?:[02468][048]00|[13579][26]00|[0-9]{2}0[48]|[0-9]{2}[2468][048]|[0-9]{2}[13579][26])-02-29)",
        r"\s(?:[01][0-9]|2[0-4]):[0-5][0-9]:[0-5][0-9]$"
    ))
    .unwrap();
}

lazy_static! {
    static ref HTTP_URL_REGEX: Regex = Regex::new(
        r"https?://(?P<www>www\.)?(?P<host>[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.\S{2,}|[a-zA-Z0-9]+\.\S{2,})"
    )
    .unwrap();
    static ref WWW_URL_REGEX: Regex =
        Regex::new(r"www\.(?:[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.\S{2,}|[a-zA-Z0-9]+\.\S{2,})")
            .unwrap();
}

/// `YYYY-M-D` with one or two digit month and day, no time component.
pub fn date_validation(date: &str) -> bool {
    DATE_REGEX.is_match(date)
}

/// Year, month and day of a date accepted by [`date_validation`].
pub fn date_parts(date: &str) -> Option<(u32, u32, u32)> {
    let captures = DATE_REGEX.captures(date)?;

    Some((
        captures[1].parse().ok()?,
        captures[2].parse().ok()?,
        captures[3].parse().ok()?,
    ))
}

/// `YYYY-MM-DD HH:MM:SS` on a real calendar day, leap years included.
pub fn date_time_validation(date: &str) -> bool {
    DATE_TIME_REGEX.is_match(date)
}

/// True when `date2` is the same as or later than `date1`.
pub fn date_after<T: PartialOrd + ?Sized>(date1: &T, date2: &T) -> bool {
    date2 >= date1
}

pub fn url_validation(url: &str) -> bool {
    if WWW_URL_REGEX.is_match(url) {
        return true;
    }

    // a scheme followed by "www" must continue with "www."
    HTTP_URL_REGEX.captures_iter(url).any(|captures| {
        captures.name("www").is_some() || !captures["host"].starts_with("www")
    })
}
