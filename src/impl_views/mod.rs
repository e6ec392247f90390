mod constructors;
mod conversions;
mod splitting;
