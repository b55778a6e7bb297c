//! Live data sources a data-binding layer can display.

use serde::{Deserialize, Serialize};

/// Grouping of data types for the binding picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataCategory {
    /// Verses and references
    Scripture,
    /// Reading plans and streaks
    ReadingProgress,
    /// Prayer journal
    Prayer,
    /// Spiritual habits
    Habits,
    /// Clock and calendar
    DateTime,
    /// Days until an event
    Countdown,
    /// Mood check-ins
    Mood,
}

impl DataCategory {
    /// Every category in picker order.
    pub const ALL: [Self; 7] = [
        Self::Scripture,
        Self::ReadingProgress,
        Self::Prayer,
        Self::Habits,
        Self::DateTime,
        Self::Countdown,
        Self::Mood,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Scripture => "Scripture",
            Self::ReadingProgress => "Reading Progress",
            Self::Prayer => "Prayer",
            Self::Habits => "Habits",
            Self::DateTime => "Date & Time",
            Self::Countdown => "Countdown",
            Self::Mood => "Mood",
        }
    }

    /// Data types belonging to this category.
    #[must_use]
    pub fn data_types(self) -> Vec<WidgetDataType> {
        WidgetDataType::ALL
            .into_iter()
            .filter(|t| t.category() == self)
            .collect()
    }
}

/// A value the host application can supply to a data-binding layer.
///
/// The set is closed; each member belongs to exactly one [`DataCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetDataType {
    /// Text of today's verse
    VerseOfTheDay,
    /// Reference of today's verse (e.g. "John 3:16")
    VerseReference,
    /// Consecutive days with reading
    ReadingStreak,
    /// Chapters read in total
    ChaptersRead,
    /// Completion of the active plan
    PlanProgress,
    /// Current day number of the active plan
    PlanDay,
    /// Time spent reading today
    ReadingTimeToday,
    /// Prayers logged in total
    PrayerCount,
    /// Prayers marked answered
    AnsweredPrayers,
    /// Consecutive days with prayer
    PrayerStreak,
    /// Longest running habit streak
    HabitStreak,
    /// Habits completed today
    HabitsCompletedToday,
    /// Today's completion rate across habits
    HabitCompletionRate,
    /// Today's date
    CurrentDate,
    /// Current time
    CurrentTime,
    /// Weekday name
    DayOfWeek,
    /// Days until Easter
    DaysUntilEaster,
    /// Days until Christmas
    DaysUntilChristmas,
    /// Time remaining until a user-chosen event
    CustomCountdown,
    /// Latest mood check-in
    CurrentMood,
    /// Consecutive days with a mood check-in
    MoodStreak,
}

impl WidgetDataType {
    /// Every data type in picker order.
    pub const ALL: [Self; 21] = [
        Self::VerseOfTheDay,
        Self::VerseReference,
        Self::ReadingStreak,
        Self::ChaptersRead,
        Self::PlanProgress,
        Self::PlanDay,
        Self::ReadingTimeToday,
        Self::PrayerCount,
        Self::AnsweredPrayers,
        Self::PrayerStreak,
        Self::HabitStreak,
        Self::HabitsCompletedToday,
        Self::HabitCompletionRate,
        Self::CurrentDate,
        Self::CurrentTime,
        Self::DayOfWeek,
        Self::DaysUntilEaster,
        Self::DaysUntilChristmas,
        Self::CustomCountdown,
        Self::CurrentMood,
        Self::MoodStreak,
    ];

    /// Category this type is grouped under.
    #[must_use]
    pub const fn category(self) -> DataCategory {
        match self {
            Self::VerseOfTheDay | Self::VerseReference => DataCategory::Scripture,
            Self::ReadingStreak
            | Self::ChaptersRead
            | Self::PlanProgress
            | Self::PlanDay
            | Self::ReadingTimeToday => DataCategory::ReadingProgress,
            Self::PrayerCount | Self::AnsweredPrayers | Self::PrayerStreak => DataCategory::Prayer,
            Self::HabitStreak | Self::HabitsCompletedToday | Self::HabitCompletionRate => {
                DataCategory::Habits
            }
            Self::CurrentDate | Self::CurrentTime | Self::DayOfWeek => DataCategory::DateTime,
            Self::DaysUntilEaster | Self::DaysUntilChristmas | Self::CustomCountdown => {
                DataCategory::Countdown
            }
            Self::CurrentMood | Self::MoodStreak => DataCategory::Mood,
        }
    }

    /// Human-readable name, also used as the default layer name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::VerseOfTheDay => "Verse of the Day",
            Self::VerseReference => "Verse Reference",
            Self::ReadingStreak => "Reading Streak",
            Self::ChaptersRead => "Chapters Read",
            Self::PlanProgress => "Plan Progress",
            Self::PlanDay => "Plan Day",
            Self::ReadingTimeToday => "Reading Time Today",
            Self::PrayerCount => "Prayer Count",
            Self::AnsweredPrayers => "Answered Prayers",
            Self::PrayerStreak => "Prayer Streak",
            Self::HabitStreak => "Habit Streak",
            Self::HabitsCompletedToday => "Habits Completed Today",
            Self::HabitCompletionRate => "Habit Completion Rate",
            Self::CurrentDate => "Current Date",
            Self::CurrentTime => "Current Time",
            Self::DayOfWeek => "Day of Week",
            Self::DaysUntilEaster => "Days Until Easter",
            Self::DaysUntilChristmas => "Days Until Christmas",
            Self::CustomCountdown => "Custom Countdown",
            Self::CurrentMood => "Current Mood",
            Self::MoodStreak => "Mood Streak",
        }
    }

    /// Symbol shown next to the type in the picker.
    #[must_use]
    pub const fn symbol_name(self) -> &'static str {
        match self.category() {
            DataCategory::Scripture => "book.fill",
            DataCategory::ReadingProgress => "chart.bar.fill",
            DataCategory::Prayer => "hands.sparkles.fill",
            DataCategory::Habits => "checkmark.circle.fill",
            DataCategory::DateTime => "calendar",
            DataCategory::Countdown => "hourglass",
            DataCategory::Mood => "face.smiling",
        }
    }

    /// Placeholder text shown in the editor before live data is available.
    #[must_use]
    pub const fn sample_value(self) -> &'static str {
        match self {
            Self::VerseOfTheDay => "For God so loved the world...",
            Self::VerseReference => "John 3:16",
            Self::ReadingStreak => "12",
            Self::ChaptersRead => "248",
            Self::PlanProgress => "45%",
            Self::PlanDay => "Day 23",
            Self::ReadingTimeToday => "15m",
            Self::PrayerCount => "87",
            Self::AnsweredPrayers => "14",
            Self::PrayerStreak => "9",
            Self::HabitStreak => "21",
            Self::HabitsCompletedToday => "3",
            Self::HabitCompletionRate => "75%",
            Self::CurrentDate => "Oct 16, 2026",
            Self::CurrentTime => "9:41 AM",
            Self::DayOfWeek => "Friday",
            Self::DaysUntilEaster => "170",
            Self::DaysUntilChristmas => "70",
            Self::CustomCountdown => "5d 4h",
            Self::CurrentMood => "Grateful",
            Self::MoodStreak => "6",
        }
    }
}

/// Formatting requested for a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatStyle {
    /// Formatter's natural rendering
    #[default]
    Default,
    /// Compact rendering
    Short,
    /// Verbose rendering
    Long,
    /// Digits only
    Numeric,
    /// Rendered as a percentage
    Percentage,
}
