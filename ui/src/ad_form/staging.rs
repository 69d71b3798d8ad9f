//! Images picked for a new ad, held locally until the ad exists.

use payloads::is_accepted_image;

/// What the staging buffer needs to know about a picked file.
pub trait ImageFile {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn mime_type(&self) -> String;
}

/// Source of local preview URLs.
///
/// Every URL handed out by `create` is passed back to `revoke` exactly once.
pub trait PreviewUrls<F> {
    fn create(&self, file: &F) -> Option<String>;
    fn revoke(&self, url: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedImage<F> {
    pub file: F,
    pub preview_url: String,
}

/// Files dropped by one `add` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFiles {
    pub names: Vec<String>,
}

impl RejectedFiles {
    pub const DESCRIPTION: &'static str =
        "Some files could not be added. Check their format and size.";
}

pub struct ImageStaging<F, P: PreviewUrls<F>> {
    entries: Vec<StagedImage<F>>,
    previews: P,
}

impl<F, P: PreviewUrls<F>> ImageStaging<F, P> {
    pub fn new(previews: P) -> Self {
        Self {
            entries: Vec::new(),
            previews,
        }
    }

    /// Append every acceptable file in selection order.
    ///
    /// Returns one aggregated notice when anything was turned away.
    pub fn add(
        &mut self,
        files: impl IntoIterator<Item = F>,
    ) -> Option<RejectedFiles>
    where
        F: ImageFile,
    {
        let mut rejected = Vec::new();

        for file in files {
            if !is_accepted_image(file.size(), &file.mime_type()) {
                rejected.push(file.name());
                continue;
            }
            match self.previews.create(&file) {
                Some(preview_url) => {
                    self.entries.push(StagedImage { file, preview_url })
                }
                None => {
                    tracing::warn!(
                        "Could not create a preview for {}",
                        file.name()
                    );
                    rejected.push(file.name());
                }
            }
        }

        if rejected.is_empty() {
            return None;
        }
        tracing::debug!("Rejected {} image(s): {:?}", rejected.len(), rejected);
        Some(RejectedFiles { names: rejected })
    }

    /// Drop the entry at `index` and release its preview. Later entries
    /// move down by one; an out-of-range index does nothing.
    pub fn remove(&mut self, index: usize) -> Option<F> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        self.previews.revoke(&entry.preview_url);
        Some(entry.file)
    }

    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.previews.revoke(&entry.preview_url);
        }
    }

    pub fn entries(&self) -> &[StagedImage<F>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F, P: PreviewUrls<F>> Drop for ImageStaging<F, P> {
    fn drop(&mut self) {
        self.clear();
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::{CountingPreviews, FakeFile};
    use super::*;
    use payloads::MAX_IMAGE_SIZE;

    fn staging() -> (ImageStaging<FakeFile, CountingPreviews>, CountingPreviews) {
        let previews = CountingPreviews::default();
        (ImageStaging::new(previews.clone()), previews)
    }

    #[test]
    fn oversized_file_is_dropped_with_one_warning() {
        let (mut staging, previews) = staging();
        let warning = staging.add([
            FakeFile::png("a.png", 1024),
            FakeFile::png("huge.png", MAX_IMAGE_SIZE + 1),
            FakeFile::png("c.png", MAX_IMAGE_SIZE),
        ]);

        assert_eq!(staging.len(), 2);
        assert_eq!(
            warning,
            Some(RejectedFiles {
                names: vec!["huge.png".into()]
            })
        );
        assert_eq!(previews.created.borrow().len(), 2);
    }

    #[test]
    fn unsupported_types_are_rejected_together() {
        let (mut staging, _) = staging();
        let gif = FakeFile {
            mime_type: "image/gif".into(),
            ..FakeFile::png("anim.gif", 10)
        };
        let pdf = FakeFile {
            mime_type: "application/pdf".into(),
            ..FakeFile::png("plan.pdf", 10)
        };
        let jpeg = FakeFile {
            mime_type: "image/jpeg".into(),
            ..FakeFile::png("porch.jpg", 10)
        };

        let warning = staging.add([gif, jpeg, pdf]).unwrap();
        assert_eq!(warning.names, vec!["anim.gif", "plan.pdf"]);
        assert_eq!(staging.entries()[0].file.name, "porch.jpg");
    }

    #[test]
    fn accepted_files_produce_no_warning() {
        let (mut staging, _) = staging();
        assert_eq!(staging.add([FakeFile::png("a.png", 1)]), None);
        assert_eq!(staging.add(Vec::new()), None);
        assert_eq!(staging.len(), 1);
    }

    #[test]
    fn remove_shifts_entries_and_releases_preview() {
        let (mut staging, previews) = staging();
        staging.add([
            FakeFile::png("a.png", 1),
            FakeFile::png("b.png", 1),
            FakeFile::png("c.png", 1),
        ]);
        let removed_url = staging.entries()[1].preview_url.clone();

        let removed = staging.remove(1).unwrap();
        assert_eq!(removed.name, "b.png");

        let names: Vec<_> =
            staging.entries().iter().map(|e| e.file.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
        assert_eq!(*previews.revoked.borrow(), vec![removed_url]);
        assert_eq!(previews.live(), 2);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let (mut staging, previews) = staging();
        staging.add([FakeFile::png("a.png", 1)]);
        assert_eq!(staging.remove(5), None);
        assert_eq!(staging.len(), 1);
        assert!(previews.revoked.borrow().is_empty());
    }

    #[test]
    fn append_order_survives_removals() {
        let (mut staging, _) = staging();
        staging.add([FakeFile::png("a.png", 1), FakeFile::png("b.png", 1)]);
        staging.remove(0);
        staging.add([FakeFile::png("c.png", 1)]);
        let names: Vec<_> =
            staging.entries().iter().map(|e| e.file.name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "c.png"]);
    }

    #[test]
    fn teardown_releases_every_preview() {
        let previews = CountingPreviews::default();
        {
            let mut staging = ImageStaging::new(previews.clone());
            staging.add([FakeFile::png("a.png", 1), FakeFile::png("b.png", 1)]);
            assert_eq!(previews.live(), 2);
        }
        assert_eq!(previews.live(), 0);

        let mut staging = ImageStaging::new(previews.clone());
        staging.add([FakeFile::png("c.png", 1)]);
        staging.clear();
        assert!(staging.is_empty());
        assert_eq!(previews.live(), 0);
    }
}
