use crate::console::forms::{amount, choice, date, kept_choice, reference, text};
use crate::console::screen::EntityForm;
use crate::shared::error::FormError;
use crate::shared::records::{parse_date, Invoice, InvoiceCreate, PaymentStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceForm {
    pub invoice_number: String,
    pub developer_id: String,
    pub total_amount: String,
    pub payment_status: Option<PaymentStatus>,
    /// `YYYY-MM-DD`
    pub due_date: String,
}

impl EntityForm for InvoiceForm {
    type Record = Invoice;
    type Create = InvoiceCreate;
    type Update = Invoice;

    fn from_record(record: &Invoice) -> Self {
        Self {
            invoice_number: record.invoice_number.clone(),
            developer_id: record.developer_id.to_string(),
            total_amount: record.total_amount.to_string(),
            payment_status: PaymentStatus::parse(&record.payment_status),
            due_date: parse_date(&record.due_date)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| record.due_date.clone()),
        }
    }

    fn to_create(&self) -> Result<InvoiceCreate, FormError> {
        self.payload(choice("paymentStatus", self.payment_status)?.as_str().to_string())
    }

    fn to_update(&self, original: &Invoice) -> Result<Invoice, FormError> {
        let payment_status = kept_choice(
            "paymentStatus",
            self.payment_status.map(PaymentStatus::as_str),
            &original.payment_status,
        )?;
        let create = self.payload(payment_status)?;
        Ok(Invoice {
            id: original.id,
            developer_id: create.developer_id,
            invoice_number: create.invoice_number,
            total_amount: create.total_amount,
            payment_status: create.payment_status,
            due_date: create.due_date.format("%Y-%m-%d").to_string(),
            created_at: original.created_at.clone(),
        })
    }
}

impl InvoiceForm {
    fn payload(&self, payment_status: String) -> Result<InvoiceCreate, FormError> {
        Ok(InvoiceCreate {
            developer_id: reference("developerId", &self.developer_id)?,
            invoice_number: text("invoiceNumber", &self.invoice_number)?,
            total_amount: amount("totalAmount", &self.total_amount)?,
            payment_status,
            due_date: date("dueDate", &self.due_date)?,
        })
    }
}
