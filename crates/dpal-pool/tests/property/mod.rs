mod pool_properties;
