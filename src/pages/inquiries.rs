//! Inbound inquiries: triage status, reply, delete.

use crate::domain::inquiry::Inquiry;
use crate::domain::types::{InquiryId, InquiryStatus};
use crate::forms::FormController;
use crate::forms::inquiry::ReplyForm;
use crate::listing::ListView;
use crate::pages::{Notice, PageError, PageResult, submit_failure};
use crate::repository::{InquiryReader, InquiryWriter};

/// Reply modal bound to the inquiry it answers.
#[derive(Debug)]
pub struct ReplyModal {
    pub inquiry_id: InquiryId,
    pub form: FormController<ReplyForm>,
}

pub struct InquiriesPage {
    list: ListView<Inquiry>,
    reply: Option<ReplyModal>,
    notice: Option<Notice>,
}

pub fn load_inquiries_page<R>(repo: &R, per_page: usize) -> PageResult<InquiriesPage>
where
    R: InquiryReader + ?Sized,
{
    let inquiries = repo.list_inquiries().map_err(|err| {
        log::error!("Failed to load inquiries: {err}");
        err
    })?;

    Ok(InquiriesPage::new(inquiries, per_page))
}

impl InquiriesPage {
    pub fn new(inquiries: Vec<Inquiry>, per_page: usize) -> Self {
        Self {
            list: ListView::new(inquiries, per_page),
            reply: None,
            notice: None,
        }
    }

    pub fn list(&self) -> &ListView<Inquiry> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView<Inquiry> {
        &mut self.list
    }

    pub fn reply(&self) -> Option<&ReplyModal> {
        self.reply.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Number of inquiries still waiting for a first response.
    pub fn unanswered(&self) -> usize {
        self.list.count_where("status", InquiryStatus::New.as_str())
    }

    pub fn open_reply(&mut self, id: InquiryId) -> PageResult<()> {
        if self.list.get(id).is_none() {
            return Err(PageError::NotFound(format!("Inquiry #{id}")));
        }
        self.reply = Some(ReplyModal {
            inquiry_id: id,
            form: FormController::default(),
        });
        Ok(())
    }

    pub fn set_reply_field(&mut self, name: &str, value: impl Into<String>) -> PageResult<()> {
        let modal = self.reply.as_mut().ok_or(PageError::NoModal)?;
        modal.form.set_field(name, value)?;
        Ok(())
    }

    pub fn send_reply<S>(&mut self, store: &S) -> PageResult<()>
    where
        S: InquiryWriter + ?Sized,
    {
        let modal = self.reply.as_mut().ok_or(PageError::NoModal)?;
        let id = modal.inquiry_id;

        let inquiry = match modal.form.submit(|reply| store.reply_to_inquiry(id, reply)) {
            Ok(inquiry) => inquiry,
            Err(err) => return Err(submit_failure(&mut self.notice, "send reply", err)),
        };

        log::info!("Replied to inquiry #{id}");
        self.notice = Some(Notice::success(format!("Reply sent to {}", inquiry.email)));
        self.list.upsert(inquiry);
        self.reply = None;
        Ok(())
    }

    pub fn set_status<S>(
        &mut self,
        id: InquiryId,
        status: InquiryStatus,
        store: &S,
    ) -> PageResult<()>
    where
        S: InquiryWriter + ?Sized,
    {
        if self.list.get(id).is_none() {
            return Err(PageError::NotFound(format!("Inquiry #{id}")));
        }

        match store.set_inquiry_status(id, status) {
            Ok(inquiry) => {
                log::info!("Inquiry #{id} marked as {status}");
                self.list.upsert(inquiry);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to update inquiry #{id}: {err}");
                self.notice = Some(Notice::error(format!("Could not update inquiry: {err}")));
                Err(err.into())
            }
        }
    }

    pub fn delete<S>(&mut self, id: InquiryId, store: &S) -> PageResult<()>
    where
        S: InquiryWriter + ?Sized,
    {
        if self.list.get(id).is_none() {
            return Err(PageError::NotFound(format!("Inquiry #{id}")));
        }

        if let Err(err) = store.delete_inquiry(id) {
            log::error!("Failed to delete inquiry #{id}: {err}");
            self.notice = Some(Notice::error(format!("Could not delete inquiry: {err}")));
            return Err(err.into());
        }

        self.list.remove(id);
        if self.reply.as_ref().is_some_and(|modal| modal.inquiry_id == id) {
            self.reply = None;
        }

        log::info!("Inquiry #{id} deleted");
        self.notice = Some(Notice::success("Inquiry deleted"));
        Ok(())
    }

    pub fn close_reply(&mut self) {
        self.reply = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
