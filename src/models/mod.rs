pub mod leasemodel;
pub mod paymentmodel;
pub mod propertymodel;
pub mod tenantmodel;
