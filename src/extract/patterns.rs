//! Pre-compiled regular expressions used by the detectors.

use regex::Regex;
use std::sync::LazyLock;

/// Full or abbreviated month names, as a regex alternation.
const MONTHS: &str = "Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Three-letter month abbreviations only.
const MONTHS_SHORT: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";

const WEEKDAYS: &str =
    "Mon(?:day)?|Tue(?:sday)?|Wed(?:nesday)?|Thu(?:rsday)?|Fri(?:day)?|Sat(?:urday)?|Sun(?:day)?";

const ORDINAL: &str = "(?:st|nd|rd|th)?";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

// -- dates -----------------------------------------------------------------

/// "January 15, 2026" / "Jan 15 2026"
pub static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"(?i)\b({MONTHS})\s+(\d{{1,2}}){ORDINAL},?\s*(\d{{4}})\b"))
});

/// "15 January 2026"
pub static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"(?i)\b(\d{{1,2}}){ORDINAL}\s+({MONTHS})\s+(\d{{4}})\b"))
});

/// "1/15/2026", "01-15-26"
pub static SLASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(\d{1,2})[/\-](\d{1,2})[/\-](\d{2,4})\b"));

/// "2026-01-15"
pub static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(\d{4})-(\d{2})-(\d{2})\b"));

/// "Monday, January 15" / "Sun, Feb 8" (no year)
pub static WEEKDAY_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)\b(?:{WEEKDAYS})[,.\s]+\s*({MONTHS})\s+(\d{{1,2}}){ORDINAL}\b"
    ))
});

/// "Sun, Feb 8" inside a flight segment window (abbreviations only).
pub static SHORT_WEEKDAY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun)[,.\s]+\s*({MONTHS_SHORT})\s+(\d{{1,2}})\b"
    ))
});

/// Any date-looking substring, used to find block boundaries.
pub static SPLIT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)\b(?:{MONTHS})\s+\d{{1,2}}{ORDINAL},?\s*\d{{0,4}}\b|\b\d{{1,2}}[/\-]\d{{1,2}}[/\-]\d{{2,4}}\b|\b\d{{4}}-\d{{2}}-\d{{2}}\b"
    ))
});

/// "SUNDAY 08 FEB 2026"
pub static DAY_NAME_FULL_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)(?:SUNDAY|MONDAY|TUESDAY|WEDNESDAY|THURSDAY|FRIDAY|SATURDAY)[,\s]+(\d{{1,2}})\s+({MONTHS_SHORT})[A-Z]*\s+(\d{{4}})"
    ))
});

// -- times -----------------------------------------------------------------

/// "7:00 PM - 9:00 PM", "7:00 - 9:00pm"
pub static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(\d{1,2}:\d{2})\s*(AM|PM)?\s*[-–—to]+\s*(\d{1,2}:\d{2})\s*(AM|PM)")
});

/// "7:00 PM"
pub static MERIDIEM_TIME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(\d{1,2}:\d{2})\s*(AM|PM)"));

pub static LABELED_START_TIME: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?:check.?in|depart|arrival|arrive|time|starts?|begins?|from)[:\s]+(\d{1,2}:\d{2})\s*(AM|PM)?",
    )
});

pub static LABELED_END_TIME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:check.?out|arrives?|ends?|until|to|through)[:\s]+(\d{1,2}:\d{2})\s*(AM|PM)?")
});

// -- end dates ---------------------------------------------------------------

pub static END_MONTH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)(?:check[\s-]?out|departure|depart(?:ing)?|end(?:s|ing)?|through|checkout)\s*(?:date)?\s*[:\-]?\s*({MONTHS})\s+(\d{{1,2}}){ORDINAL},?\s*(\d{{4}})?"
    ))
});

pub static END_SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?:check[\s-]?out|departure|end(?:s|ing)?|through|checkout)\s*(?:date)?\s*[:\-]?\s*(\d{1,2})[/\-](\d{1,2})[/\-](\d{2,4})",
    )
});

// -- labels ------------------------------------------------------------------

pub static LOCATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:location|address|where|venue|place|restaurant|hotel)\s*[:\-]\s*")
});

/// "Phone: ..." style line: never a continuation of a location.
pub static FIELD_LABEL_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Z][a-z]+\s*[:\-]"));

pub static STATE_ZIP_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{2}\s+\d"));

pub static STREET_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(\d{1,5}\s+[A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*\s+(?:St(?:reet)?|Ave(?:nue)?|Blvd|Boulevard|Dr(?:ive)?|Rd|Road|Ln|Lane|Way|Pl(?:ace)?|Ct|Court|Cir(?:cle)?|Pkwy|Parkway|Hwy|Highway)\.?(?:,?\s*(?:Suite|Ste|Apt|#)\s*\w+)?(?:,?\s*[A-Z][a-zA-Z\s]+)?(?:,?\s*[A-Z]{2}\s+\d{5})?)\b",
    )
});

pub static NAME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:subject|event|title|reservation(?:\s+for)?|booking)\s*[:\-]\s*")
});

pub static METADATA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:location|address|date|time|where|when|from|to)\s*:")
});

pub static LEADING_SHORT_DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\d{1,2}[/\-]\d{1,2}"));

pub static LEADING_TIME: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d{1,2}:\d{2}"));

pub static CONFIRMATION_CODE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?:confirmation|booking|reference|record\s+locator|PNR|itinerary)\s*(?:#|number|no\.?|code)?\s*[:\-]?\s*([A-Z0-9]{4,12})",
    )
});

// -- names -------------------------------------------------------------------

pub static AIRLINE_FLIGHT: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b((?:United|Delta|American|Southwest|JetBlue|Alaska|Spirit|Frontier|Hawaiian|Sun Country|Allegiant)\s+(?:Airlines?\s+)?Flight\s+#?\d+)\b",
    )
});

pub static ROUTE_FLIGHT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)([A-Z]{3})\s*[►▶→\-–—]?\s*([A-Z]{3})\s+Flight\s+(\d{3,5})")
});

pub static BARE_FLIGHT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b((?:Flight|FLT)\s*#?\s*\d{3,5})\b"));

pub static MEAL_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:reservation|dinner|lunch|brunch|breakfast)\s+(?:at|for)\s+(.+)")
});

pub static STAY_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:stay\s+at|hotel|check.?in\s+at)\s+(.+)"));

// -- block boundaries ----------------------------------------------------------

/// Lines that open a new event on their own: separator rules, numbered
/// reservations, lodging headers and meal phrases.
pub static BOUNDARY_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"^[-=_]{3,}\s*$"),
        compile(r"(?i)^\s*(?:event|reservation|booking|confirmation)\s*#?\s*\d"),
        compile(r"(?i)^\s*(?:hotel|stay|check.?in)\b"),
        compile(r"(?i)^\s*(?:dinner|lunch|brunch|breakfast)\s+(?:at|for)\b"),
    ]
});

pub fn is_boundary_line(line: &str) -> bool {
    BOUNDARY_MARKERS.iter().any(|re| re.is_match(line))
}

// -- flights -----------------------------------------------------------------

pub static FLIGHT_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)([A-Z]{3})\s*[►▶→▸▷➤➜➔➙>\-–—]?\s*([A-Z]{3})\s+Flight\s+(\d{3,5})")
});

pub static AIRPORT_PAIR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"([A-Z]{3})\s+([A-Z]{3})\b"));

pub static FLIGHT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)Flight\s+(\d{3,5})"));

pub static LABELED_CONF_CODE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i:confirmation|conf\.?)\s*(?i:code|#|number)?\s*:?\s*(?i:is\s+)?([A-Z]{6})\b")
});

pub static LOCATOR_CODE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:PNR|record\s+locator|booking\s+code)[:\s]+([A-Z0-9]{5,8})")
});

// -- hotels ------------------------------------------------------------------

pub static CHECK_IN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)check[\s\-]?in"));

pub static CHECK_OUT: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)check[\s\-]?out"));

pub static HOTEL_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:hotel|resort|inn|suites?|lodge|reservation|booking\s+confirmation|room\s+type|room:|nights?:?|guest\s+name)",
    )
});

pub static LODGING_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)hotel|resort|inn|suites?|lodge|stay"));

pub static BRAND_SUFFIX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\s+A\s+BELMOND.*$"));

pub static TRAILING_STAY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\s*(?:Hotel\s*)?Stay$"));

pub static NAME_DENYLIST: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^(?:BOOKING|RESERVATION|CONFIRMATION|DETAILS|GUEST|CHECK|ROOM|HOTEL)(?:\s+(?:IN|OUT|DETAILS|NAME|TYPE|CONFIRMATION|INFORMATION))?$",
    )
});

pub static CHECK_IN_TIME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)check[\s\-]?in\s+time[:\s]+(\d{1,2}:\d{2})\s*(AM|PM)?")
});

pub static REGION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(St\.?\s*Martin|Saint\s*Martin|French\s*West\s*Indies|[A-Z][a-z]+,\s*[A-Z]{2})\b",
    )
});

/// Label-anchored date patterns for check-in / check-out, in priority order:
/// "D Month YYYY", "Month D, YYYY", "M/D/YY[YY]".
pub fn labeled_stay_dates(label: &str) -> [Regex; 3] {
    [
        compile(&format!(
            r"(?i){label}[:\s]+(?:[A-Za-z]+,?\s*)?(\d{{1,2}})\s+({MONTHS_SHORT})[a-z]*\s+(\d{{4}})"
        )),
        compile(&format!(
            r"(?i){label}[:\s]+(?:[A-Za-z]+,?\s*)?({MONTHS_SHORT})[a-z]*\s+(\d{{1,2}}){ORDINAL},?\s*(\d{{4}})"
        )),
        compile(&format!(r"(?i){label}[:\s]+(\d{{1,2}})[/\-](\d{{1,2}})[/\-](\d{{2,4}})")),
    ]
}

pub static CHECK_IN_DATES: LazyLock<[Regex; 3]> =
    LazyLock::new(|| labeled_stay_dates(r"check[\s\-]?in"));

pub static CHECK_OUT_DATES: LazyLock<[Regex; 3]> =
    LazyLock::new(|| labeled_stay_dates(r"check[\s\-]?out"));

pub static HOTEL_NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // all-caps header line ("LA SAMANNA")
        compile(r"(?m)^([A-Z][A-Z \t]{2,})$"),
        // "La Samanna - Your booking confirmation"
        compile(r"(?i)([A-Za-z][A-Za-z\s&']+)\s*[-–—]\s*(?:Your\s+)?(?:booking|reservation)"),
        // capitalized phrase ending in a lodging word
        compile(r"(?m)^([A-Z][A-Za-z\s&']+(?:Hotel|Resort|Inn|Suites?|Lodge))"),
        // "Subject: Fwd: La Samanna Reservation Confirmation"
        compile(
            r"(?i)Subject[:\s]+(?:Fwd:\s*|Re:\s*)?([A-Za-z][A-Za-z\s&']+?)(?:\s+Reservation|\s+Confirmation|\s+Booking)",
        ),
    ]
});

pub static HOTEL_LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(?i)(?:address|location)[:\s]+([^\n]+)"),
        compile(
            r"(?i)(\d+[ \t]+[A-Za-z \t]+\b(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr)\b[^\n]*)",
        ),
        compile(r"([A-Za-z][A-Za-z \t]*,[ \t]*[A-Z]{2}[ \t]+\d{5})"),
    ]
});

pub static HOTEL_CONFIRMATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(?i)booking\s*(?:#|number|no\.?)?[:\s]+([A-Z0-9\-]{6,25})"),
        compile(r"(?i)confirmation\s*(?:#|number|no\.?|code)?[:\s]+([A-Z0-9\-]{6,25})"),
        compile(r"(?i)reservation\s*(?:#|number|no\.?)?[:\s]+([A-Z0-9\-]{6,25})"),
        compile(r"(?i)(?:conf|ref)\.?\s*(?:#|number|code)?[:\s]+([A-Z0-9\-]{6,25})"),
    ]
});
