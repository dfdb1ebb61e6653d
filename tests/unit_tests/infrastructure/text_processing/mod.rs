mod image_ocr_adapter_test;
