pub mod address_oracle;
