
#[cfg(test)]
mod numeric_field_tests;


#[cfg(test)]
mod layer_order_tests;

#[cfg(test)]
mod render_tests;
