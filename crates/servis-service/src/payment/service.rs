//! Payment use cases.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use servis_auth::rbac::{PaymentPermission, RbacEnforcer};
use servis_core::error::AppError;
use servis_core::types::{OrderId, PaymentId, TechnicianId};
use servis_database::store::{DUPLICATE_PAYMENT, OrderStore, PaymentStore, TechnicianStore};
use servis_entity::order::Order;
use servis_entity::payment::{NewPayment, Payment, PaymentChanges, PaymentMethod, PaymentStatus};

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// Validated input for recording a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPayment {
    /// Amount charged, never negative.
    pub amount: Decimal,
    /// Payment method.
    pub method: PaymentMethod,
    /// Initial status.
    pub status: PaymentStatus,
    /// External reference.
    pub transaction_ref: Option<String>,
}

/// Authorizes and executes payment operations.
#[derive(Clone)]
pub struct PaymentService {
    orders: Arc<dyn OrderStore>,
    technicians: Arc<dyn TechnicianStore>,
    payments: Arc<dyn PaymentStore>,
    notifications: Arc<NotificationService>,
    rbac: RbacEnforcer,
}

impl std::fmt::Debug for PaymentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentService")
            .field("rbac", &self.rbac)
            .finish_non_exhaustive()
    }
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(
        orders: Arc<dyn OrderStore>,
        technicians: Arc<dyn TechnicianStore>,
        payments: Arc<dyn PaymentStore>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            orders,
            technicians,
            payments,
            notifications,
            rbac: RbacEnforcer::new(),
        }
    }

    /// Returns the payment of an order the caller may see.
    pub async fn show(&self, ctx: &RequestContext, order_id: OrderId) -> Result<Payment, AppError> {
        let order = self.load_order(order_id).await?;

        self.rbac.require_permission(ctx.role, PaymentPermission::View)?;
        self.require_order_access(ctx, &order).await?;

        self.payments
            .find_by_order(order.id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment not found"))
    }

    /// Records the payment of an order and notifies its customer.
    ///
    /// Only technicians assigned to the order and admins may record. An order
    /// holds at most one payment.
    pub async fn store(
        &self,
        ctx: &RequestContext,
        order_id: OrderId,
        input: RecordPayment,
    ) -> Result<Payment, AppError> {
        let order = self.load_order(order_id).await?;

        self.rbac.require_permission(ctx.role, PaymentPermission::Create)?;
        self.require_order_access(ctx, &order).await?;

        if self.payments.find_by_order(order.id).await?.is_some() {
            return Err(AppError::bad_request(DUPLICATE_PAYMENT));
        }

        let paid_at = input.status.is_paid().then(Utc::now);
        let payment = self
            .payments
            .create_payment(&NewPayment {
                order_id: order.id,
                amount: input.amount,
                method: input.method,
                status: input.status,
                transaction_ref: input.transaction_ref,
                paid_at,
            })
            .await?;

        info!(
            payment_id = %payment.id,
            order_id = %order.id,
            user_id = %ctx.user_id,
            user_name = %ctx.name,
            status = %payment.status,
            amount = %payment.amount,
            "Payment recorded"
        );

        self.notifications.payment_recorded(&order).await?;
        Ok(payment)
    }

    /// Loads a payment the caller may update.
    ///
    /// Runs before the request body is validated, so an unknown payment is a
    /// 404 and a caller without update rights a 403 whatever the body holds.
    pub async fn authorize_update(
        &self,
        ctx: &RequestContext,
        payment_id: PaymentId,
    ) -> Result<Payment, AppError> {
        let current = self
            .payments
            .find_payment(payment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment not found"))?;

        self.rbac.require_permission(ctx.role, PaymentPermission::Update)?;
        Ok(current)
    }

    /// Applies a partial update to a payment returned by [`Self::authorize_update`].
    ///
    /// `paid_at` is stamped the first time the status becomes `PAID`. The
    /// customer is notified when the status moves into `PAID`.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        current: Payment,
        mut changes: PaymentChanges,
    ) -> Result<Payment, AppError> {
        let becomes_paid = changes.sets_paid();
        changes.paid_at = (becomes_paid && current.paid_at.is_none()).then(Utc::now);

        let updated = self.payments.update_payment(current.id, &changes).await?;

        info!(
            payment_id = %updated.id,
            order_id = %updated.order_id,
            user_id = %ctx.user_id,
            user_name = %ctx.name,
            status = %updated.status,
            "Payment updated"
        );

        if becomes_paid && !current.status.is_paid() {
            let order = self.load_order(updated.order_id).await?;
            self.notifications.payment_confirmed(&order).await?;
        }

        Ok(updated)
    }

    async fn load_order(&self, order_id: OrderId) -> Result<Order, AppError> {
        self.orders
            .find_order(order_id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))
    }

    async fn require_order_access(
        &self,
        ctx: &RequestContext,
        order: &Order,
    ) -> Result<(), AppError> {
        let technician_id = self.technician_profile(ctx).await?;
        self.rbac
            .require_order_access(ctx.role, ctx.user_id, technician_id, order)
    }

    /// The caller's technician profile, looked up only for technicians.
    async fn technician_profile(
        &self,
        ctx: &RequestContext,
    ) -> Result<Option<TechnicianId>, AppError> {
        if !ctx.role.is_technician() {
            return Ok(None);
        }
        Ok(self
            .technicians
            .find_by_user(ctx.user_id)
            .await?
            .map(|t| t.id))
    }
}
