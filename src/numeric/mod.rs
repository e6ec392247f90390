mod impl_mask;
mod impl_numeric;
