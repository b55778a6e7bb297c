//! Data-binding resolution.
//!
//! A data-binding layer names a [`WidgetDataType`]; at render time the host
//! supplies the raw value through a [`DataProvider`] and a [`ValueFormatter`]
//! turns it into text. Resolution only reads the project and the provider,
//! so a render pass may run on another thread as long as nobody mutates the
//! project meanwhile.

use crate::models::{
    DataBindingConfig, FormatStyle, LayerElement, TextElement, WidgetDataType, WidgetProject,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use uuid::Uuid;

/// Value handed over by the host for one data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum RawValue {
    /// Counts and streaks
    Integer(i64),
    /// Free text (verses, moods)
    String(String),
    /// Point in time
    Date(DateTime<Utc>),
    /// Elapsed or remaining time, in whole seconds
    Duration(i64),
}

/// Source of live values.
///
/// Lookups must be side-effect free and cheap enough to run once per binding
/// per render pass.
pub trait DataProvider {
    /// Current value for `data_type`, or `None` when unavailable.
    fn lookup(&self, data_type: WidgetDataType) -> Option<RawValue>;
}

impl<F> DataProvider for F
where
    F: Fn(WidgetDataType) -> Option<RawValue>,
{
    fn lookup(&self, data_type: WidgetDataType) -> Option<RawValue> {
        self(data_type)
    }
}

/// Provider backed by a fixed table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProvider {
    values: HashMap<WidgetDataType, RawValue>,
}

impl StaticProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value.
    #[must_use]
    pub fn with(mut self, data_type: WidgetDataType, value: RawValue) -> Self {
        self.values.insert(data_type, value);
        self
    }

    /// Parses a JSON object keyed by data type.
    ///
    /// Values may be tagged (`{"type": "duration", "payload": 900}`) or plain:
    /// integers become [`RawValue::Integer`], strings [`RawValue::String`].
    /// `null` entries are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_studio::models::WidgetDataType;
    /// use widget_studio::services::binding::{DataProvider, RawValue, StaticProvider};
    ///
    /// let provider = StaticProvider::from_json(r#"{"readingStreak": 12, "currentMood": "Grateful"}"#)?;
    /// assert_eq!(provider.lookup(WidgetDataType::ReadingStreak), Some(RawValue::Integer(12)));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<WidgetDataType, Value> =
            serde_json::from_str(json).context("Failed to parse value table")?;

        let mut values = HashMap::with_capacity(entries.len());
        for (data_type, value) in entries {
            let raw = match value {
                Value::Null => continue,
                Value::String(s) => RawValue::String(s),
                Value::Number(n) => RawValue::Integer(n.as_i64().with_context(|| {
                    format!("Value for {:?} must be a whole number, got {}", data_type, n)
                })?),
                tagged @ Value::Object(_) => serde_json::from_value(tagged)
                    .with_context(|| format!("Invalid tagged value for {:?}", data_type))?,
                other => anyhow::bail!("Unsupported value for {:?}: {}", data_type, other),
            };
            values.insert(data_type, raw);
        }
        Ok(Self { values })
    }

    /// Number of values in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl DataProvider for StaticProvider {
    fn lookup(&self, data_type: WidgetDataType) -> Option<RawValue> {
        self.values.get(&data_type).cloned()
    }
}

/// Provider returning each type's placeholder text, for editor previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

impl DataProvider for SampleProvider {
    fn lookup(&self, data_type: WidgetDataType) -> Option<RawValue> {
        Some(RawValue::String(data_type.sample_value().to_string()))
    }
}

/// Turns a raw value into display text for a requested style.
pub trait ValueFormatter {
    /// Formats `value` in `style`.
    fn format(&self, value: &RawValue, style: FormatStyle) -> String;
}

/// Built-in formatter (English month and unit names).
///
/// | Value    | default      | short      | long                       | numeric     | percentage   |
/// |----------|--------------|------------|----------------------------|-------------|--------------|
/// | integer  | `1,234`      | `1.2K`     | `1,234`                    | `1234`      | `1234%`      |
/// | string   | as-is        | truncated  | as-is                      | digits only | as-is        |
/// | date     | `Oct 16, 2026` | `10/16/26` | `Friday, October 16, 2026` | `2026-10-16` | year elapsed |
/// | duration | `1h 5m`      | `1h`       | `1 hour 5 minutes`         | minutes     | of one day   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFormatter {
    thousands_separator: char,
}

/// Characters kept by [`FormatStyle::Short`] for strings.
const SHORT_TEXT_CHARS: usize = 24;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

impl DefaultFormatter {
    /// Formatter grouping thousands with `,`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            thousands_separator: ',',
        }
    }

    /// Uses `separator` between thousands groups.
    #[must_use]
    pub const fn with_separator(separator: char) -> Self {
        Self {
            thousands_separator: separator,
        }
    }

    fn format_integer(self, n: i64, style: FormatStyle) -> String {
        match style {
            FormatStyle::Default | FormatStyle::Long => group_thousands(n, self.thousands_separator),
            FormatStyle::Short => compact(n),
            FormatStyle::Numeric => n.to_string(),
            FormatStyle::Percentage => format!("{n}%"),
        }
    }

    fn format_date(date: DateTime<Utc>, style: FormatStyle) -> String {
        match style {
            FormatStyle::Default => date.format("%b %-d, %Y").to_string(),
            FormatStyle::Short => date.format("%-m/%-d/%y").to_string(),
            FormatStyle::Long => date.format("%A, %B %-d, %Y").to_string(),
            FormatStyle::Numeric => date.format("%Y-%m-%d").to_string(),
            FormatStyle::Percentage => {
                let days_in_year = NaiveDate::from_ymd_opt(date.year(), 12, 31).map_or(365, |d| d.ordinal());
                format!("{}%", date.ordinal() * 100 / days_in_year)
            }
        }
    }

    fn format_duration(seconds: i64, style: FormatStyle) -> String {
        let seconds = seconds.max(0);
        let parts = [
            (seconds / DAY, "d", "day"),
            (seconds % DAY / HOUR, "h", "hour"),
            (seconds % HOUR / MINUTE, "m", "minute"),
            (seconds % MINUTE, "s", "second"),
        ];
        // Largest non-zero unit and the one after it
        let significant: Vec<_> = parts
            .iter()
            .skip_while(|(v, _, _)| *v == 0)
            .take(2)
            .filter(|(v, _, _)| *v > 0)
            .collect();

        match style {
            FormatStyle::Default => {
                if significant.is_empty() {
                    return "0m".to_string();
                }
                significant
                    .iter()
                    .map(|(v, unit, _)| format!("{v}{unit}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            FormatStyle::Short => significant
                .first()
                .map_or_else(|| "0m".to_string(), |(v, unit, _)| format!("{v}{unit}")),
            FormatStyle::Long => {
                if significant.is_empty() {
                    return "0 minutes".to_string();
                }
                significant
                    .iter()
                    .map(|(v, _, name)| format!("{v} {name}{}", if *v == 1 { "" } else { "s" }))
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            FormatStyle::Numeric => (seconds / MINUTE).to_string(),
            FormatStyle::Percentage => format!("{}%", i128::from(seconds) * 100 / i128::from(DAY)),
        }
    }

    fn format_text(text: &str, style: FormatStyle) -> String {
        match style {
            FormatStyle::Short if text.chars().count() > SHORT_TEXT_CHARS => {
                let kept: String = text.chars().take(SHORT_TEXT_CHARS - 1).collect();
                format!("{}\u{2026}", kept.trim_end())
            }
            FormatStyle::Numeric => {
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                if digits.is_empty() {
                    text.to_string()
                } else {
                    digits
                }
            }
            _ => text.to_string(),
        }
    }
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueFormatter for DefaultFormatter {
    fn format(&self, value: &RawValue, style: FormatStyle) -> String {
        match value {
            RawValue::Integer(n) => self.format_integer(*n, style),
            RawValue::String(s) => Self::format_text(s, style),
            RawValue::Date(date) => Self::format_date(*date, style),
            RawValue::Duration(seconds) => Self::format_duration(*seconds, style),
        }
    }
}

fn group_thousands(n: i64, separator: char) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// `1234` -> `1.2K`, truncating (never rounding up into the next unit).
fn compact(n: i64) -> String {
    let abs = n.unsigned_abs();
    let (divisor, suffix) = match abs {
        0..=999 => return n.to_string(),
        1_000..=999_999 => (1_000, "K"),
        1_000_000..=999_999_999 => (1_000_000, "M"),
        _ => (1_000_000_000, "B"),
    };
    let tenths = abs / (divisor / 10);
    let sign = if n < 0 { "-" } else { "" };
    if tenths % 10 == 0 {
        format!("{sign}{}{suffix}", tenths / 10)
    } else {
        format!("{sign}{}.{}{suffix}", tenths / 10, tenths % 10)
    }
}

/// Resolves one binding to its display string.
///
/// Without a value the binding's `empty_text` is returned exactly, with no
/// prefix or suffix. Otherwise the result is `prefix + formatted + suffix`.
///
/// # Examples
///
/// ```
/// use widget_studio::models::{DataBindingConfig, WidgetDataType};
/// use widget_studio::services::binding::{resolve_binding, DefaultFormatter, RawValue, StaticProvider};
///
/// let binding = DataBindingConfig::new(WidgetDataType::PlanDay)
///     .with_affixes("Day ", "!")
///     .with_empty_text("-");
///
/// let empty = StaticProvider::new();
/// assert_eq!(resolve_binding(&binding, &empty, &DefaultFormatter::new()), "-");
///
/// let provider = StaticProvider::new().with(WidgetDataType::PlanDay, RawValue::Integer(23));
/// assert_eq!(resolve_binding(&binding, &provider, &DefaultFormatter::new()), "Day 23!");
/// ```
pub fn resolve_binding<P, F>(binding: &DataBindingConfig, provider: &P, formatter: &F) -> String
where
    P: DataProvider + ?Sized,
    F: ValueFormatter + ?Sized,
{
    resolve_with_style(binding, binding.format_style, provider, formatter)
}

fn resolve_with_style<P, F>(
    binding: &DataBindingConfig,
    style: FormatStyle,
    provider: &P,
    formatter: &F,
) -> String
where
    P: DataProvider + ?Sized,
    F: ValueFormatter + ?Sized,
{
    match provider.lookup(binding.data_type) {
        Some(value) => format!(
            "{}{}{}",
            binding.prefix,
            formatter.format(&value, style),
            binding.suffix
        ),
        None => binding.empty_text.clone(),
    }
}

/// Resolves every binding of a project against one provider and formatter.
///
/// A `default_style` other than [`FormatStyle::Default`] is used for bindings
/// that request the default style.
#[derive(Debug, Clone)]
pub struct BindingResolver<P, F = DefaultFormatter> {
    provider: P,
    formatter: F,
    default_style: FormatStyle,
}

impl<P: DataProvider> BindingResolver<P> {
    /// Resolver using [`DefaultFormatter`].
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            formatter: DefaultFormatter::new(),
            default_style: FormatStyle::Default,
        }
    }
}

impl<P: DataProvider, F: ValueFormatter> BindingResolver<P, F> {
    /// Swaps in another formatter.
    pub fn with_formatter<G: ValueFormatter>(self, formatter: G) -> BindingResolver<P, G> {
        BindingResolver {
            provider: self.provider,
            formatter,
            default_style: self.default_style,
        }
    }

    /// Style used when a binding asks for [`FormatStyle::Default`].
    #[must_use]
    pub fn with_default_style(mut self, style: FormatStyle) -> Self {
        self.default_style = style;
        self
    }

    /// Resolves a single binding.
    pub fn resolve(&self, binding: &DataBindingConfig) -> String {
        let style = match binding.format_style {
            FormatStyle::Default => self.default_style,
            other => other,
        };
        resolve_with_style(binding, style, &self.provider, &self.formatter)
    }

    /// Resolves every data-binding layer of `project`.
    pub fn resolve_project<'a>(&self, project: &'a WidgetProject) -> ResolvedProject<'a> {
        let bindings: BTreeMap<Uuid, String> = project
            .data_bindings()
            .map(|(id, binding)| (id, self.resolve(binding)))
            .collect();
        debug!(
            project = %project.id(),
            bindings = bindings.len(),
            "Resolved data bindings"
        );
        ResolvedProject { project, bindings }
    }
}

/// A project plus the display string of each data-binding layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProject<'a> {
    project: &'a WidgetProject,
    bindings: BTreeMap<Uuid, String>,
}

impl<'a> ResolvedProject<'a> {
    /// Source project.
    #[must_use]
    pub const fn project(&self) -> &'a WidgetProject {
        self.project
    }

    /// Layer id to display string.
    #[must_use]
    pub const fn bindings(&self) -> &BTreeMap<Uuid, String> {
        &self.bindings
    }

    /// Display string of a data-binding layer.
    #[must_use]
    pub fn text_for(&self, layer_id: Uuid) -> Option<&str> {
        self.bindings.get(&layer_id).map(String::as_str)
    }

    /// Copy of the project where each data-binding layer is a text layer.
    ///
    /// The text layer takes the binding's text style, the resolved string,
    /// and keeps the layer's id, frame, style and z-index.
    #[must_use]
    pub fn materialize(&self) -> WidgetProject {
        let mut project = self.project.clone();
        for layer in project.layers_mut() {
            let Some(text) = self.bindings.get(&layer.id()) else {
                continue;
            };
            if let LayerElement::DataBinding(binding) = &layer.element {
                layer.element = LayerElement::Text(TextElement {
                    text: text.clone(),
                    ..binding.text_style.clone()
                });
            }
        }
        project
    }
}
