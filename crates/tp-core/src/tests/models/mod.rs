mod identity;
mod role_set;
