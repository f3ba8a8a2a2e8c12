//! Form State Model
//!
//! The drafted Bittree profile: an ordered list of labeled links plus the
//! handle, picture URL, and description. The draft lives entirely in the
//! browser; submitting it is the only thing that persists it.

use serde::Serialize;

/// One labeled hyperlink on the generated profile page
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LinkEntry {
    pub link: String,
    pub linktext: String,
}

/// The drafted profile.
///
/// Field order matches the wire payload of `POST /api/add`, so the struct
/// serializes directly as the request body. `links` is never empty; a draft
/// always starts with one blank row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkForm {
    pub links: Vec<LinkEntry>,
    pub handle: String,
    pub pic: String,
    pub desc: String,
}

impl Default for LinkForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkForm {
    /// A fresh draft: one blank link row, empty scalar fields
    pub fn new() -> Self {
        Self {
            links: vec![LinkEntry::default()],
            handle: String::new(),
            pic: String::new(),
            desc: String::new(),
        }
    }

    /// A fresh draft with the handle already claimed
    pub fn with_handle(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            ..Self::new()
        }
    }

    /// Replace the row at `index` wholesale.
    ///
    /// Both fields are given together so that a single-field edit carries
    /// the sibling value through unchanged. All other rows, the row count,
    /// and the row order are untouched. `index` must come from enumerating
    /// the current rows; an out-of-range index is a bug in the caller and
    /// panics.
    pub fn update_link(&mut self, index: usize, link: String, linktext: String) {
        self.links[index] = LinkEntry { link, linktext };
    }

    /// Append a blank link row
    pub fn add_link(&mut self) {
        self.links.push(LinkEntry::default());
    }

    /// Whether the draft can be submitted.
    ///
    /// The handle, the picture URL, and the first row's link text must all
    /// be non-blank after trimming. Rows past the first never block
    /// submission.
    pub fn is_valid(&self) -> bool {
        !self.handle.trim().is_empty()
            && !self.pic.trim().is_empty()
            && !self.links[0].linktext.trim().is_empty()
    }

    /// Back to the fresh-draft shape
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> LinkForm {
        let mut form = LinkForm::with_handle("alice");
        form.pic = "http://x/p.png".to_string();
        form.update_link(0, "http://a".to_string(), "A".to_string());
        form
    }

    #[test]
    fn fresh_draft_has_one_blank_row() {
        let form = LinkForm::new();
        assert_eq!(form.links, vec![LinkEntry::default()]);
        assert_eq!(form.handle, "");
        assert_eq!(form.pic, "");
        assert_eq!(form.desc, "");
    }

    #[test]
    fn with_handle_prefills_only_the_handle() {
        let form = LinkForm::with_handle("alice");
        assert_eq!(form.handle, "alice");
        assert_eq!(form.links, vec![LinkEntry::default()]);
        assert_eq!(form.pic, "");
        assert_eq!(form.desc, "");
    }

    #[test]
    fn fresh_draft_is_not_submittable() {
        assert!(!LinkForm::new().is_valid());
    }

    #[test]
    fn complete_draft_is_submittable() {
        assert!(valid_form().is_valid());
    }

    #[test]
    fn blank_handle_blocks_submission() {
        let mut form = valid_form();
        form.handle = "   ".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn blank_pic_blocks_submission() {
        let mut form = valid_form();
        form.pic = String::new();
        assert!(!form.is_valid());
    }

    #[test]
    fn blank_first_link_text_blocks_submission() {
        let mut form = valid_form();
        form.update_link(0, "http://a".to_string(), " ".to_string());
        assert!(!form.is_valid());
    }

    #[test]
    fn empty_rows_past_the_first_do_not_block() {
        let mut form = valid_form();
        form.add_link();
        form.add_link();
        assert!(form.is_valid());
    }

    #[test]
    fn empty_desc_does_not_block() {
        let form = valid_form();
        assert_eq!(form.desc, "");
        assert!(form.is_valid());
    }

    #[test]
    fn update_link_touches_only_the_given_row() {
        let mut form = LinkForm::new();
        form.update_link(0, "http://a".to_string(), "A".to_string());
        form.add_link();
        form.add_link();
        form.update_link(2, "http://c".to_string(), "C".to_string());

        form.update_link(1, "http://b".to_string(), "B".to_string());

        assert_eq!(form.links.len(), 3);
        assert_eq!(form.links[0].link, "http://a");
        assert_eq!(form.links[0].linktext, "A");
        assert_eq!(form.links[1].link, "http://b");
        assert_eq!(form.links[1].linktext, "B");
        assert_eq!(form.links[2].link, "http://c");
        assert_eq!(form.links[2].linktext, "C");
    }

    #[test]
    #[should_panic]
    fn update_link_out_of_range_panics() {
        let mut form = LinkForm::new();
        form.update_link(1, "http://b".to_string(), "B".to_string());
    }

    #[test]
    fn add_link_appends_one_blank_row() {
        let mut form = valid_form();
        let before = form.links.clone();

        form.add_link();

        assert_eq!(form.links.len(), before.len() + 1);
        assert_eq!(form.links[..before.len()], before[..]);
        assert_eq!(*form.links.last().unwrap(), LinkEntry::default());
    }

    #[test]
    fn reset_restores_the_fresh_shape() {
        let mut form = valid_form();
        form.desc = "my links".to_string();
        form.add_link();

        form.reset();

        assert_eq!(form, LinkForm::new());
    }

    #[test]
    fn draft_serializes_as_the_wire_payload() {
        let mut form = valid_form();
        form.desc = String::new();
        assert_eq!(
            serde_json::to_string(&form).unwrap(),
            r#"{"links":[{"link":"http://a","linktext":"A"}],"handle":"alice","pic":"http://x/p.png","desc":""}"#
        );
    }
}
