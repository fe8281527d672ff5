//! JSON wire types.
//!
//! Request and response bodies for the saga adapters, plus conversions from the core
//! projections. Field names are stable API surface.

use saga_core::{
    Chapter, ChapterCard, ChapterDraft, HeroCover, RawNumber, ReadingView, SiteInfo,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteInfoRes {
    pub saga: String,
    pub title: String,
    pub tagline: String,
    pub hero_url: String,
    pub footer: String,
}

impl From<SiteInfo> for SiteInfoRes {
    fn from(info: SiteInfo) -> Self {
        Self {
            saga: info.saga,
            title: info.title,
            tagline: info.tagline,
            hero_url: info.hero_url,
            footer: info.footer,
        }
    }
}

/// Query string for listing chapters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListChaptersReq {
    /// Case-insensitive search text. Omitted or blank lists every chapter.
    #[serde(default)]
    pub q: Option<String>,
}

/// A chapter as shown in the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChapterSummary {
    pub id: String,
    pub number: i64,
    pub label: String,
    /// At most three tags.
    pub tags: Vec<String>,
    pub title: String,
    pub teaser: String,
    pub cover: String,
}

impl From<ChapterCard> for ChapterSummary {
    fn from(card: ChapterCard) -> Self {
        Self {
            id: card.id.to_string(),
            number: card.number,
            label: card.label,
            tags: card.tags,
            title: card.title,
            teaser: card.teaser,
            cover: card.cover,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListChaptersRes {
    /// Matching chapters, ascending by number.
    pub chapters: Vec<ChapterSummary>,
    /// The query the list was filtered by.
    pub query: String,
    /// Set when no chapter matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Raw authoring input.
///
/// Every field is optional. Absent, `null` or mistyped values are read as absent, so the
/// chapter builder applies its defaults instead of the request being rejected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewChapterReq {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Integer, or text parsed as a leading base-10 integer.
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<Object>)]
    pub number: Option<RawNumber>,
    /// Comma-separated tags.
    #[serde(default, deserialize_with = "lenient_text")]
    pub tags: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub teaser: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<RawNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .map(RawNumber::Integer)
            .or_else(|| n.as_f64().map(RawNumber::Float)),
        Value::String(s) => Some(RawNumber::Text(s)),
        _ => None,
    };
    Ok(number)
}

impl From<NewChapterReq> for ChapterDraft {
    fn from(req: NewChapterReq) -> Self {
        ChapterDraft {
            title: req.title,
            number: req.number,
            tags: req.tags,
            teaser: req.teaser,
            cover: req.cover,
            content: req.content,
        }
    }
}

/// A full chapter record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChapterRes {
    pub id: String,
    pub number: i64,
    pub title: String,
    pub teaser: String,
    pub cover: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl From<Chapter> for ChapterRes {
    fn from(chapter: Chapter) -> Self {
        Self {
            id: chapter.id.to_string(),
            number: chapter.number,
            title: chapter.title,
            teaser: chapter.teaser,
            cover: chapter.cover,
            tags: chapter.tags,
            content: chapter.content,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadChapterRes {
    pub id: String,
    pub heading: String,
    pub tags: Vec<String>,
    pub cover: String,
    pub content: String,
}

impl From<ReadingView> for ReadChapterRes {
    fn from(view: ReadingView) -> Self {
        Self {
            id: view.id.to_string(),
            heading: view.heading,
            tags: view.tags,
            cover: view.cover,
            content: view.content,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SetHeroReq {
    /// Empty restores the default image.
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroRes {
    pub url: String,
    pub is_default: bool,
}

impl From<&HeroCover> for HeroRes {
    fn from(hero: &HeroCover) -> Self {
        Self {
            url: hero.url().to_owned(),
            is_default: hero.is_default(),
        }
    }
}
