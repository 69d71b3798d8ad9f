//! Validate, create the ad, then upload its staged images.

use payloads::{AdDraft, AdId, ClientError, FieldErrors, responses::Ad, schema};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::staging::StagedImage;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("Could not read {0}")]
    UnreadableFile(String),
}

/// The remote operations a submission needs.
#[allow(async_fn_in_trait)]
pub trait AdService<F> {
    async fn create_ad(&self, draft: &AdDraft) -> Result<Ad, ServiceError>;

    async fn upload_images(
        &self,
        ad_id: &AdId,
        files: &[&F],
    ) -> Result<(), ServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    ValidationFailed(FieldErrors),
    #[error("Could not create the ad: {0}")]
    RequestFailed(#[source] ServiceError),
    #[error("Ad {ad_id} was created but its images were not uploaded: {source}")]
    UploadFailed {
        ad_id: AdId,
        #[source]
        source: ServiceError,
    },
    #[error("A submission is already in progress")]
    InFlight,
}

/// An ad that exists on the backend but is still missing its images.
#[derive(Debug, Clone)]
struct CreatedAd {
    draft: AdDraft,
    ad_id: AdId,
}

/// Clears the busy flag on every exit path.
struct BusyGuard {
    busy: Rc<Cell<bool>>,
}

impl BusyGuard {
    fn acquire(busy: &Rc<Cell<bool>>) -> Option<Self> {
        if busy.replace(true) {
            return None;
        }
        Some(Self { busy: busy.clone() })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

/// Submits one creation form. Clones share the busy flag and the record of
/// a partially created ad.
#[derive(Clone)]
pub struct SubmissionPipeline<S> {
    service: S,
    busy: Rc<Cell<bool>>,
    created: Rc<RefCell<Option<CreatedAd>>>,
}

impl<S> SubmissionPipeline<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            busy: Rc::new(Cell::new(false)),
            created: Rc::new(RefCell::new(None)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// The ad left without images by the last failed upload, if any.
    pub fn ad_awaiting_images(&self) -> Option<AdId> {
        self.created.borrow().as_ref().map(|c| c.ad_id.clone())
    }

    /// Run one submission.
    ///
    /// At most one create call and one upload call are made. When the
    /// previous attempt created the ad but failed to upload, submitting the
    /// same draft again only retries the upload.
    pub async fn submit<F>(
        &self,
        candidate: &Value,
        images: &[StagedImage<F>],
    ) -> Result<AdId, SubmitError>
    where
        S: AdService<F>,
    {
        self.submit_with_status(candidate, images, |_| {}).await
    }

    /// Like [`Self::submit`], reporting `true` to `on_busy` once this call
    /// owns the pipeline and `false` when it lets go. A refused call reports
    /// nothing, so it never clears the state of the one in flight.
    pub async fn submit_with_status<F>(
        &self,
        candidate: &Value,
        images: &[StagedImage<F>],
        on_busy: impl Fn(bool),
    ) -> Result<AdId, SubmitError>
    where
        S: AdService<F>,
    {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!("Ignoring submit while another is in flight");
            return Err(SubmitError::InFlight);
        };
        on_busy(true);
        let result = self.run(candidate, images).await;
        on_busy(false);
        result
    }

    async fn run<F>(
        &self,
        candidate: &Value,
        images: &[StagedImage<F>],
    ) -> Result<AdId, SubmitError>
    where
        S: AdService<F>,
    {
        let draft = schema::validate(candidate).map_err(|errors| {
            tracing::debug!("Ad draft has {} invalid field(s)", errors.len());
            SubmitError::ValidationFailed(errors)
        })?;

        let existing = self
            .created
            .borrow()
            .as_ref()
            .filter(|created| created.draft == draft)
            .map(|created| created.ad_id.clone());

        let ad_id = match existing {
            Some(ad_id) => {
                tracing::info!("Retrying image upload for ad {ad_id}");
                ad_id
            }
            None => {
                self.created.replace(None);
                let ad = self
                    .service
                    .create_ad(&draft)
                    .await
                    .map_err(SubmitError::RequestFailed)?;
                tracing::info!("Created ad {}", ad.id);
                ad.id
            }
        };

        if !images.is_empty() {
            let files: Vec<&F> = images.iter().map(|image| &image.file).collect();
            if let Err(source) = self.service.upload_images(&ad_id, &files).await
            {
                tracing::error!("Image upload for ad {ad_id} failed: {source}");
                self.created.replace(Some(CreatedAd {
                    draft,
                    ad_id: ad_id.clone(),
                }));
                return Err(SubmitError::UploadFailed { ad_id, source });
            }
            tracing::info!("Uploaded {} image(s) for ad {ad_id}", files.len());
        }

        self.created.replace(None);
        Ok(ad_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// User-facing feedback as a title, description and variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NotificationVariant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
        }
    }

    /// Feedback for a finished submission. A rejected re-entrant submit
    /// produces none.
    pub fn for_result(result: &Result<AdId, SubmitError>) -> Option<Self> {
        use NotificationVariant::{Default, Destructive};

        let notification = match result {
            Ok(_) => Self::new("Ad created", "Your ad was created successfully!", Default),
            Err(SubmitError::ValidationFailed(errors)) => Self::new(
                "Check the form",
                format!(
                    "{} field(s) need attention before the ad can be created.",
                    errors.len()
                ),
                Destructive,
            ),
            Err(SubmitError::RequestFailed(_)) => Self::new(
                "Error",
                "Something went wrong while creating the ad. Please try again.",
                Destructive,
            ),
            Err(SubmitError::UploadFailed { .. }) => Self::new(
                "Images not uploaded",
                "Your ad was created, but its images could not be uploaded. \
                 Submit again to retry the upload.",
                Destructive,
            ),
            Err(SubmitError::InFlight) => return None,
        };
        Some(notification)
    }
}

/// Receives user-facing feedback.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad_form::staging::fakes::FakeFile;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{FutureExt, join};
    use payloads::FieldPath;
    use reqwest::StatusCode;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Outcome {
        Ok,
        Fail,
    }

    struct Calls {
        creates: Vec<AdDraft>,
        uploads: Vec<(AdId, Vec<String>)>,
    }

    /// Records every call and answers according to the configured outcomes.
    #[derive(Clone)]
    struct FakeService {
        calls: Rc<RefCell<Calls>>,
        create: Rc<Cell<Outcome>>,
        upload: Rc<Cell<Outcome>>,
        gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
    }

    impl FakeService {
        fn new() -> Self {
            Self {
                calls: Rc::new(RefCell::new(Calls {
                    creates: Vec::new(),
                    uploads: Vec::new(),
                })),
                create: Rc::new(Cell::new(Outcome::Ok)),
                upload: Rc::new(Cell::new(Outcome::Ok)),
                gate: Rc::new(RefCell::new(None)),
            }
        }

        fn create_calls(&self) -> usize {
            self.calls.borrow().creates.len()
        }

        fn upload_calls(&self) -> usize {
            self.calls.borrow().uploads.len()
        }
    }

    fn server_error() -> ServiceError {
        ServiceError::Client(ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".into(),
        ))
    }

    impl AdService<FakeFile> for FakeService {
        async fn create_ad(&self, draft: &AdDraft) -> Result<Ad, ServiceError> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            let count = {
                let mut calls = self.calls.borrow_mut();
                calls.creates.push(draft.clone());
                calls.creates.len()
            };
            match self.create.get() {
                Outcome::Ok => Ok(stored_ad(draft, &format!("ad-{count}"))),
                Outcome::Fail => Err(server_error()),
            }
        }

        async fn upload_images(
            &self,
            ad_id: &AdId,
            files: &[&FakeFile],
        ) -> Result<(), ServiceError> {
            let names = files.iter().map(|f| f.name.clone()).collect();
            self.calls.borrow_mut().uploads.push((ad_id.clone(), names));
            match self.upload.get() {
                Outcome::Ok => Ok(()),
                Outcome::Fail => Err(server_error()),
            }
        }
    }

    fn stored_ad(draft: &AdDraft, id: &str) -> Ad {
        Ad {
            id: AdId::from(id),
            title: draft.title.clone(),
            description: draft.description.clone(),
            rental_type: draft.rental_type,
            property: draft.property.clone(),
            pictures: Vec::new(),
            is_verified: false,
            active: true,
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    fn valid_candidate() -> Value {
        let mut candidate = schema::initial_candidate();
        for (path, value) in [
            ("title", json!("Cabin in the pines")),
            (
                "description",
                json!(
                    "Wooden cabin with a fireplace, a sauna and hiking trails \
                     starting right at the door."
                ),
            ),
            ("rentalType", json!("entire_home")),
            ("property.type", json!("cottage")),
            ("property.price.amount", json!(95)),
            ("property.price.unit", json!("night")),
            ("property.capacity.rooms", json!(2)),
            ("property.capacity.beds", json!(3)),
            ("property.capacity.bathrooms", json!(1)),
            ("property.capacity.guests.adults", json!(4)),
            ("property.capacity.guests.children", json!(2)),
            ("property.address.country", json!("Finland")),
            ("property.address.city", json!("Rovaniemi")),
            ("property.address.street", json!("Metsätie 4")),
            ("property.address.postal_code", json!(96100)),
            ("property.address.region", json!("Lapland")),
            ("property.livingArea.value", json!(70)),
            ("property.livingArea.unit", json!("square_meter")),
            ("property.livingArea.symbol", json!("m²")),
        ] {
            FieldPath::parse(path).unwrap().set(&mut candidate, value);
        }
        candidate
    }

    fn images(names: &[&str]) -> Vec<StagedImage<FakeFile>> {
        names
            .iter()
            .map(|name| StagedImage {
                file: FakeFile::png(name, 100),
                preview_url: format!("blob:{name}"),
            })
            .collect()
    }

    #[test]
    fn invalid_draft_makes_no_calls() {
        let service = FakeService::new();
        let pipeline = SubmissionPipeline::new(service.clone());

        let result = block_on(
            pipeline.submit(&schema::initial_candidate(), &images(&["a.png"])),
        );

        let Err(SubmitError::ValidationFailed(errors)) = result else {
            panic!("expected validation failure, got {result:?}");
        };
        assert!(errors.contains("title"));
        assert_eq!(service.create_calls(), 0);
        assert_eq!(service.upload_calls(), 0);
        assert!(!pipeline.is_busy());
    }

    #[test]
    fn numeric_minimum_violation_makes_no_calls() {
        for (path, value) in [
            ("property.capacity.rooms", json!(0)),
            ("property.price.amount", json!(0)),
        ] {
            let service = FakeService::new();
            let pipeline = SubmissionPipeline::new(service.clone());
            let mut candidate = valid_candidate();
            FieldPath::parse(path).unwrap().set(&mut candidate, value);

            let result = block_on(pipeline.submit(&candidate, &images(&["a.png"])));

            let Err(SubmitError::ValidationFailed(errors)) = result else {
                panic!("expected validation failure for {path}, got {result:?}");
            };
            assert_eq!(errors.len(), 1, "{errors}");
            assert!(errors.contains(path));
            assert_eq!(service.create_calls(), 0);
            assert_eq!(service.upload_calls(), 0);
        }
    }

    #[test]
    fn create_without_images_skips_upload() {
        let service = FakeService::new();
        let pipeline = SubmissionPipeline::new(service.clone());

        let ad_id = block_on(pipeline.submit::<FakeFile>(&valid_candidate(), &[]))
            .unwrap();

        assert_eq!(ad_id, AdId::from("ad-1"));
        assert_eq!(service.create_calls(), 1);
        assert_eq!(service.upload_calls(), 0);
        let draft = &service.calls.borrow().creates[0];
        assert_eq!(draft.property.price.currency, "EUR");
    }

    #[test]
    fn images_are_uploaded_in_one_batch() {
        let service = FakeService::new();
        let pipeline = SubmissionPipeline::new(service.clone());

        let ad_id = block_on(
            pipeline.submit(&valid_candidate(), &images(&["a.png", "b.png"])),
        )
        .unwrap();

        let calls = service.calls.borrow();
        assert_eq!(
            calls.uploads,
            vec![(ad_id, vec!["a.png".to_string(), "b.png".to_string()])]
        );
    }

    #[test]
    fn failed_create_is_a_request_failure() {
        let service = FakeService::new();
        service.create.set(Outcome::Fail);
        let pipeline = SubmissionPipeline::new(service.clone());

        let result = block_on(pipeline.submit(&valid_candidate(), &images(&["a.png"])));

        assert!(matches!(result, Err(SubmitError::RequestFailed(_))));
        assert_eq!(service.upload_calls(), 0);
        assert_eq!(pipeline.ad_awaiting_images(), None);
        assert!(!pipeline.is_busy());
    }

    #[test]
    fn failed_upload_keeps_the_created_ad() {
        let service = FakeService::new();
        service.upload.set(Outcome::Fail);
        let pipeline = SubmissionPipeline::new(service.clone());
        let staged = images(&["a.png"]);

        let result = block_on(pipeline.submit(&valid_candidate(), &staged));
        let Err(SubmitError::UploadFailed { ad_id, .. }) = result else {
            panic!("expected upload failure, got {result:?}");
        };
        assert_eq!(ad_id, AdId::from("ad-1"));
        assert_eq!(pipeline.ad_awaiting_images(), Some(ad_id.clone()));
        assert!(!pipeline.is_busy());

        // Same draft again: no second create, the upload is retried.
        service.upload.set(Outcome::Ok);
        let retried = block_on(pipeline.submit(&valid_candidate(), &staged)).unwrap();
        assert_eq!(retried, ad_id);
        assert_eq!(service.create_calls(), 1);
        assert_eq!(service.upload_calls(), 2);
        assert_eq!(pipeline.ad_awaiting_images(), None);
    }

    #[test]
    fn repeated_upload_failures_never_create_twice() {
        let service = FakeService::new();
        service.upload.set(Outcome::Fail);
        let pipeline = SubmissionPipeline::new(service.clone());
        let staged = images(&["a.png"]);

        for _ in 0..3 {
            let result = block_on(pipeline.submit(&valid_candidate(), &staged));
            assert!(matches!(result, Err(SubmitError::UploadFailed { .. })));
        }
        assert_eq!(service.create_calls(), 1);
        assert_eq!(service.upload_calls(), 3);
    }

    #[test]
    fn changed_draft_after_upload_failure_creates_again() {
        let service = FakeService::new();
        service.upload.set(Outcome::Fail);
        let pipeline = SubmissionPipeline::new(service.clone());
        let staged = images(&["a.png"]);

        let _ = block_on(pipeline.submit(&valid_candidate(), &staged));

        let mut changed = valid_candidate();
        FieldPath::parse("title")
            .unwrap()
            .set(&mut changed, json!("Cabin in the tall pines"));
        service.upload.set(Outcome::Ok);
        let ad_id = block_on(pipeline.submit(&changed, &staged)).unwrap();

        assert_eq!(ad_id, AdId::from("ad-2"));
        assert_eq!(service.create_calls(), 2);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let service = FakeService::new();
        let (release, gate) = oneshot::channel();
        service.gate.replace(Some(gate));
        let pipeline = SubmissionPipeline::new(service.clone());
        let candidate = valid_candidate();

        let first = pipeline.submit::<FakeFile>(&candidate, &[]);
        let second = async {
            // The first submit is parked on the gate by now.
            assert!(pipeline.is_busy());
            let refused = pipeline.submit::<FakeFile>(&candidate, &[]).await;
            let _ = release.send(());
            refused
        };

        let (first, second) = block_on(join(first, second.boxed_local()));

        assert_eq!(first.unwrap(), AdId::from("ad-1"));
        assert!(matches!(second, Err(SubmitError::InFlight)));
        assert_eq!(service.create_calls(), 1);
        assert!(!pipeline.is_busy());
    }

    #[test]
    fn refused_submit_leaves_the_busy_status_alone() {
        let service = FakeService::new();
        let (release, gate) = oneshot::channel();
        service.gate.replace(Some(gate));
        let pipeline = SubmissionPipeline::new(service.clone());
        let candidate = valid_candidate();
        let status = RefCell::new(Vec::new());
        let record = |busy: bool| status.borrow_mut().push(busy);

        let first = pipeline.submit_with_status::<FakeFile>(&candidate, &[], record);
        let second = async {
            let refused = pipeline
                .submit_with_status::<FakeFile>(&candidate, &[], record)
                .await;
            // Still shown as busy after the refusal.
            assert_eq!(*status.borrow(), vec![true]);
            let _ = release.send(());
            refused
        };

        let (first, second) = block_on(join(first, second.boxed_local()));

        assert!(first.is_ok());
        assert!(matches!(second, Err(SubmitError::InFlight)));
        assert_eq!(*status.borrow(), vec![true, false]);
    }

    #[test]
    fn notifications_distinguish_failures() {
        let ok = Notification::for_result(&Ok(AdId::from("x"))).unwrap();
        assert_eq!(ok.variant, NotificationVariant::Default);
        assert_eq!(ok.title, "Ad created");

        let request = Notification::for_result(&Err(SubmitError::RequestFailed(
            server_error(),
        )))
        .unwrap();
        let upload = Notification::for_result(&Err(SubmitError::UploadFailed {
            ad_id: AdId::from("x"),
            source: server_error(),
        }))
        .unwrap();
        assert_eq!(request.variant, NotificationVariant::Destructive);
        assert_eq!(upload.variant, NotificationVariant::Destructive);
        assert_ne!(request.title, upload.title);
        assert_ne!(request.description, upload.description);

        assert_eq!(Notification::for_result(&Err(SubmitError::InFlight)), None);
    }
}
