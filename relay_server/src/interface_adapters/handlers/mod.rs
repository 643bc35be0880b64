pub mod wish_proxy;
