mod benefit;
mod cache_partition;
mod category;
mod identity;
mod identity_id;
mod profile;
mod profile_update;
mod role;
