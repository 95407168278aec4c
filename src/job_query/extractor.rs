// src/job_query/extractor.rs
use anyhow::Result;
use scraper::{ElementRef, Selector};

use crate::utils::{clean_text, contains_ignore_case};

/// Pulls the job-type and job-name cells out of one table row.
///
/// Implementations encode a single site's table layout. Returning `None`
/// means "no such cell in this row"; the row is then skipped.
pub trait CellExtractor: Send + Sync {
    fn job_type_cell(&self, row: ElementRef<'_>) -> Option<String>;

    /// With a title filter, the first cell mentioning the title wins. Every
    /// cell is a candidate, so a title that also appears in the location
    /// column can select the location cell.
    fn job_name_cell(&self, row: ElementRef<'_>, job_title: Option<&str>) -> Option<String>;
}

const JOB_TYPE_SELECTOR: &str = ".rsbuttons + .rsbuttons + td";
const JOB_NAME_SELECTOR: &str = ".rsbuttons + .rsbuttons + td + td + td";

/// Layout of the postings table: two `.rsbuttons` cells, then type,
/// two filler cells, then the posting name.
pub struct RsButtonsLayout {
    job_type: Selector,
    job_name: Selector,
    cell: Selector,
}

impl RsButtonsLayout {
    pub fn new() -> Result<Self> {
        Ok(Self {
            job_type: parse_selector(JOB_TYPE_SELECTOR)?,
            job_name: parse_selector(JOB_NAME_SELECTOR)?,
            cell: parse_selector("td")?,
        })
    }

    fn first_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
        row.select(selector)
            .next()
            .map(|cell| clean_text(&cell.text().collect::<String>()))
    }
}

impl CellExtractor for RsButtonsLayout {
    fn job_type_cell(&self, row: ElementRef<'_>) -> Option<String> {
        Self::first_text(row, &self.job_type)
    }

    fn job_name_cell(&self, row: ElementRef<'_>, job_title: Option<&str>) -> Option<String> {
        match job_title {
            Some(title) => row
                .select(&self.cell)
                .map(|cell| cell.text().collect::<String>())
                .find(|text| contains_ignore_case(text, title))
                .map(|text| clean_text(&text)),
            None => Self::first_text(row, &self.job_name),
        }
    }
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("Invalid selector '{}': {}", selector, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const ROW: &str = r#"<table><tr>
        <td class="rsbuttons">View</td><td class="rsbuttons">Apply</td>
        <td> Licensed
             Electrician </td><td>03/01</td><td>Oakland</td><td>Apprentice Wireman</td>
    </tr></table>"#;

    fn first_row(doc: &Html) -> ElementRef<'_> {
        let tr = parse_selector("tr").unwrap();
        doc.select(&tr).next().unwrap()
    }

    #[test]
    fn test_positional_cells() {
        let layout = RsButtonsLayout::new().unwrap();
        let doc = Html::parse_document(ROW);
        let row = first_row(&doc);

        assert_eq!(layout.job_type_cell(row).as_deref(), Some("Licensed Electrician"));
        assert_eq!(layout.job_name_cell(row, None).as_deref(), Some("Apprentice Wireman"));
    }

    #[test]
    fn test_title_search_picks_matching_cell() {
        let layout = RsButtonsLayout::new().unwrap();
        let doc = Html::parse_document(ROW);
        let row = first_row(&doc);

        assert_eq!(
            layout.job_name_cell(row, Some("wireman")).as_deref(),
            Some("Apprentice Wireman")
        );
        assert_eq!(layout.job_name_cell(row, Some("Plumber")), None);
    }

    #[test]
    fn test_title_search_matches_raw_cell_text() {
        let layout = RsButtonsLayout::new().unwrap();
        let doc = Html::parse_document(
            "<table><tr><td>Oakland</td><td>Senior  Plu<i>mber</i></td></tr></table>",
        );
        let row = first_row(&doc);

        assert_eq!(
            layout.job_name_cell(row, Some("Senior  Plumber")).as_deref(),
            Some("Senior Plumber")
        );
    }

    #[test]
    fn test_missing_markers_yield_nothing() {
        let layout = RsButtonsLayout::new().unwrap();
        let doc = Html::parse_document(
            "<table><tr><td>Licensed</td><td>Oakland</td><td>Apprentice</td></tr></table>",
        );
        let row = first_row(&doc);

        assert_eq!(layout.job_type_cell(row), None);
        assert_eq!(layout.job_name_cell(row, None), None);
    }
}
